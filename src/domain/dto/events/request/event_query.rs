//! 이벤트 조회/일괄 삭제 쿼리 파라미터

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::events::DayOfWeek;
use crate::utils::pagination::{paginate, Page, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use crate::utils::string_utils::deserialize_optional_string;
use crate::utils::validation::validate_day_of_week;

/// `GET /api/v1/events?dayOfWeek=&description=&onlyMyEvents=&page=&limit=`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_day_of_week"))]
    pub day_of_week: Option<String>,

    /// 대소문자 무시 부분 일치
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,

    pub only_my_events: Option<bool>,

    #[validate(range(min = 1, message = "Page must be a positive integer."))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100."))]
    pub limit: Option<i64>,
}

impl EventListQuery {
    /// 검증을 통과한 뒤에만 호출해야 합니다.
    pub fn day(&self) -> Option<DayOfWeek> {
        self.day_of_week.as_deref().and_then(|d| d.parse().ok())
    }

    pub fn only_mine(&self) -> bool {
        self.only_my_events.unwrap_or(false)
    }

    pub fn page(&self) -> Page {
        paginate(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
        )
    }
}

/// `DELETE /api/v1/events?dayOfWeek=`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventsQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Day of the week is required."),
        custom(function = "validate_bulk_day_of_week")
    )]
    pub day_of_week: Option<String>,
}

impl DeleteEventsQuery {
    /// 검증을 통과한 뒤에만 호출해야 합니다.
    pub fn day(&self) -> Option<DayOfWeek> {
        self.day_of_week.as_deref().and_then(|d| d.parse().ok())
    }
}

fn validate_bulk_day_of_week(value: &str) -> Result<(), ValidationError> {
    value.parse::<DayOfWeek>().map(|_| ()).map_err(|_| {
        ValidationError::new("day_of_week").with_message("Invalid day of the week.".into())
    })
}
