//! 이벤트 응답 DTO

use serde::Serialize;

use crate::domain::entities::events::{DayOfWeek, Event};

/// 공개 이벤트 정보
///
/// ```json
/// { "_id": "665f...", "description": "Gym", "dayOfWeek": "monday", "userId": "665e..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: DayOfWeek,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let Event {
            id,
            description,
            day_of_week,
            user_id,
        } = event;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            description,
            day_of_week,
            user_id: user_id.to_hex(),
        }
    }
}

/// 일괄 삭제 결과
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedEventsResponse {
    pub deleted_events: Vec<EventResponse>,
}
