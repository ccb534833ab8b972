//! 이벤트 데이터 액세스 계층
//!
//! [`EventRepository`] trait과 MongoDB 구현 [`MongoEventRepository`]를 제공합니다.

pub mod event_repo;

pub use event_repo::MongoEventRepository;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::core::errors::AppResult;
use crate::domain::entities::events::{DayOfWeek, Event};
use crate::utils::pagination::Page;
use crate::utils::string_utils::escape_regex;

/// 이벤트 저장소 추상화
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// 새 이벤트 저장
    async fn create(&self, event: Event) -> AppResult<Event>;

    /// ID로 이벤트 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Event>>;

    /// 필터와 페이지에 맞는 이벤트 목록 (`_id` 오름차순)
    async fn find_many(&self, filter: &EventFilter, page: Page) -> AppResult<Vec<Event>>;

    /// ID로 이벤트 삭제. 삭제된 문서가 있으면 `true`.
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool>;

    /// 소유자의 이벤트 중 주어진 ID 목록에 해당하는 것만 삭제합니다.
    ///
    /// 이 호출이 실제로 지운 ID만 반환합니다. 그 사이 다른 요청이 먼저 지운 문서는 제외됩니다.
    async fn delete_many(&self, user_id: &ObjectId, ids: &[ObjectId]) -> AppResult<Vec<ObjectId>>;
}

/// 이벤트 목록 조회 조건
///
/// 소유자 조건은 항상 포함됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub user_id: ObjectId,
    pub day_of_week: Option<DayOfWeek>,
    /// 대소문자를 무시한 부분 일치
    pub description: Option<String>,
}

impl EventFilter {
    pub fn owned_by(user_id: ObjectId) -> Self {
        Self {
            user_id,
            day_of_week: None,
            description: None,
        }
    }

    pub fn with_day(mut self, day_of_week: Option<DayOfWeek>) -> Self {
        self.day_of_week = day_of_week;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// MongoDB 쿼리 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        let mut filter = doc! { "userId": self.user_id };
        if let Some(day) = self.day_of_week {
            filter.insert("dayOfWeek", day.as_str());
        }
        if let Some(description) = &self.description {
            filter.insert(
                "description",
                doc! { "$regex": escape_regex(description), "$options": "i" },
            );
        }
        filter
    }

    /// 메모리 상의 이벤트가 조건에 맞는지 확인합니다.
    pub fn matches(&self, event: &Event) -> bool {
        if !event.is_owned_by(&self.user_id) {
            return false;
        }
        if let Some(day) = self.day_of_week {
            if event.day_of_week != day {
                return false;
            }
        }
        if let Some(description) = &self.description {
            if !event
                .description
                .to_lowercase()
                .contains(&description.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}
