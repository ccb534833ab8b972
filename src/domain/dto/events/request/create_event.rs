//! 이벤트 생성 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_day_of_week, validate_description};

/// `POST /api/v1/events` 본문
///
/// ```json
/// { "description": "Gym", "dayOfWeek": "monday" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(
        required(message = "Description is required."),
        custom(function = "validate_description")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "Day of the week is required."),
        custom(function = "validate_day_of_week")
    )]
    pub day_of_week: Option<String>,
}
