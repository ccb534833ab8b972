//! # 이벤트 관리 서비스 구현
//!
//! 요일별 이벤트의 생성, 조회, 삭제를 담당합니다.
//! 모든 연산은 인증된 사용자 기준으로 동작하며, 다른 사용자의 이벤트는
//! 읽을 수도 지울 수도 없습니다 (403, 내용은 노출하지 않음).

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::events::{
    CreateEventRequest, DeleteEventsQuery, DeletedEventsResponse, EventListQuery, EventResponse,
};
use crate::domain::entities::events::{DayOfWeek, Event};
use crate::repositories::events::{EventFilter, EventRepository};
use crate::services::auth::{require_user, NOT_AUTHENTICATED_MESSAGE};
use crate::utils::pagination::Page;
use crate::utils::validation::{parse_object_id, DAY_OF_WEEK_INVALID_MESSAGE};

const INVALID_EVENT_ID_MESSAGE: &str = "Invalid event ID format.";
const EVENT_NOT_FOUND_MESSAGE: &str = "Event not found.";
const EVENT_FORBIDDEN_MESSAGE: &str = "You are not allowed to access this event.";

/// 이벤트 관리 비즈니스 로직 서비스
pub struct EventService {
    event_repo: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self { event_repo }
    }

    /// 인증된 사용자 소유의 이벤트를 생성합니다.
    ///
    /// 인증 확인이 검증보다 먼저 수행되므로 토큰이 없으면 본문과 관계없이 401입니다.
    pub async fn create_event(
        &self,
        request: CreateEventRequest,
        user_id: Option<&str>,
    ) -> AppResult<EventResponse> {
        let owner = owner_id(user_id)?;
        request.validate()?;

        let (Some(description), Some(day_of_week)) = (request.description, request.day_of_week)
        else {
            return Err(AppError::InternalError(
                "검증을 통과한 이벤트 요청에 누락된 필드가 있습니다".to_string(),
            ));
        };
        let day_of_week = parse_day(&day_of_week)?;

        let created = self
            .event_repo
            .create(Event::new(description, day_of_week, owner))
            .await?;
        log::info!(
            "이벤트 생성: {} ({})",
            created.id.map(|id| id.to_hex()).unwrap_or_default(),
            day_of_week
        );

        Ok(EventResponse::from(created))
    }

    /// ID로 이벤트를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::BadRequest)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 이벤트 없음
    /// * `Err(AppError::AuthorizationError)` - 다른 사용자의 이벤트
    pub async fn get_event(&self, id: &str, user_id: Option<&str>) -> AppResult<EventResponse> {
        let owner = owner_id(user_id)?;
        let event = self.owned_event(id, &owner).await?;

        Ok(EventResponse::from(event))
    }

    /// 요일, 설명, 페이지 조건으로 이벤트 목록을 조회합니다.
    ///
    /// 결과는 항상 요청한 사용자의 이벤트로 한정됩니다.
    /// 결과가 비어 있으면 `onlyMyEvents` 여부에 따라 다른 메시지의 404를 반환합니다.
    pub async fn get_events(
        &self,
        query: EventListQuery,
        user_id: Option<&str>,
    ) -> AppResult<Vec<EventResponse>> {
        let owner = owner_id(user_id)?;
        query.validate()?;

        let page = query.page();
        let filter = EventFilter::owned_by(owner)
            .with_day(query.day())
            .with_description(query.description.clone());

        let events = self.event_repo.find_many(&filter, page).await?;

        if events.is_empty() {
            let message = if query.only_mine() {
                "No events created by this user."
            } else {
                "No events found"
            };
            return Err(AppError::NotFound(message.to_string()));
        }

        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// 소유자만 이벤트를 삭제할 수 있습니다.
    pub async fn delete_event(&self, id: &str, user_id: Option<&str>) -> AppResult<()> {
        let owner = owner_id(user_id)?;
        let event = self.owned_event(id, &owner).await?;

        let Some(event_id) = event.id else {
            return Err(AppError::NotFound(EVENT_NOT_FOUND_MESSAGE.to_string()));
        };

        // 조회와 삭제 사이에 다른 요청이 먼저 지웠을 수 있음
        if !self.event_repo.delete_by_id(&event_id).await? {
            return Err(AppError::NotFound(EVENT_NOT_FOUND_MESSAGE.to_string()));
        }

        log::info!("이벤트 삭제: {}", event_id.to_hex());
        Ok(())
    }

    /// 요청한 사용자의 특정 요일 이벤트를 모두 삭제하고 삭제된 목록을 반환합니다.
    ///
    /// 먼저 대상 집합을 읽은 뒤 정확히 그 ID들만 소유자 조건과 함께 삭제합니다.
    /// 두 단계는 하나의 트랜잭션이 아니므로, 응답에는 이 호출이 실제로 삭제한 이벤트만 담깁니다.
    pub async fn delete_events(
        &self,
        query: DeleteEventsQuery,
        user_id: Option<&str>,
    ) -> AppResult<DeletedEventsResponse> {
        let owner = owner_id(user_id)?;
        query.validate()?;

        let Some(day_of_week) = query.day() else {
            return Err(AppError::field("dayOfWeek", "Invalid day of the week."));
        };

        let filter = EventFilter::owned_by(owner).with_day(Some(day_of_week));
        let events = self.event_repo.find_many(&filter, Page::ALL).await?;

        if events.is_empty() {
            return Err(AppError::NotFound("No events found for deletion.".to_string()));
        }

        let ids: Vec<ObjectId> = events.iter().filter_map(|e| e.id).collect();
        let deleted = self.event_repo.delete_many(&owner, &ids).await?;

        if deleted.len() != ids.len() {
            log::warn!(
                "일괄 삭제 개수 불일치: 조회 {}건, 삭제 {}건 ({})",
                ids.len(),
                deleted.len(),
                day_of_week
            );
        }
        if deleted.is_empty() {
            return Err(AppError::NotFound("No events found for deletion.".to_string()));
        }
        log::info!("{} 이벤트 {}건 삭제", day_of_week, deleted.len());

        // 이 호출이 실제로 지운 이벤트만 응답에 포함
        Ok(DeletedEventsResponse {
            deleted_events: events
                .into_iter()
                .filter(|e| e.id.is_some_and(|id| deleted.contains(&id)))
                .map(EventResponse::from)
                .collect(),
        })
    }

    async fn owned_event(&self, id: &str, owner: &ObjectId) -> AppResult<Event> {
        let event_id = parse_object_id(id, INVALID_EVENT_ID_MESSAGE)?;

        let event = self
            .event_repo
            .find_by_id(&event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND_MESSAGE.to_string()))?;

        if !event.is_owned_by(owner) {
            log::warn!("다른 사용자의 이벤트 접근 시도: event {}", event_id.to_hex());
            return Err(AppError::AuthorizationError(EVENT_FORBIDDEN_MESSAGE.to_string()));
        }

        Ok(event)
    }
}

/// 토큰의 사용자 ID를 ObjectId로 바꿉니다. 형식이 맞지 않는 토큰도 인증 실패입니다.
fn owner_id(user_id: Option<&str>) -> AppResult<ObjectId> {
    let user_id = require_user(user_id)?;
    ObjectId::parse_str(user_id)
        .map_err(|_| AppError::AuthenticationError(NOT_AUTHENTICATED_MESSAGE.to_string()))
}

fn parse_day(value: &str) -> AppResult<DayOfWeek> {
    value
        .parse()
        .map_err(|_| AppError::field("dayOfWeek", DAY_OF_WEEK_INVALID_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryEventRepository;
    use async_trait::async_trait;

    /// 일괄 삭제 도중 다른 요청이 첫 번째 이벤트를 먼저 지우는 상황을 재현하는 저장소
    struct RacingEventRepository {
        inner: InMemoryEventRepository,
    }

    #[async_trait]
    impl EventRepository for RacingEventRepository {
        async fn create(&self, event: Event) -> AppResult<Event> {
            self.inner.create(event).await
        }

        async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Event>> {
            self.inner.find_by_id(id).await
        }

        async fn find_many(&self, filter: &EventFilter, page: Page) -> AppResult<Vec<Event>> {
            self.inner.find_many(filter, page).await
        }

        async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
            self.inner.delete_by_id(id).await
        }

        async fn delete_many(&self, user_id: &ObjectId, ids: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
            if let Some(first) = ids.first() {
                self.inner.delete_by_id(first).await?;
            }
            self.inner.delete_many(user_id, ids).await
        }
    }

    fn service() -> EventService {
        EventService::new(Arc::new(InMemoryEventRepository::new()))
    }

    fn new_event(description: &str, day: &str) -> CreateEventRequest {
        CreateEventRequest {
            description: Some(description.to_string()),
            day_of_week: Some(day.to_string()),
        }
    }

    fn list(day: Option<&str>, only_mine: Option<bool>) -> EventListQuery {
        EventListQuery {
            day_of_week: day.map(String::from),
            only_my_events: only_mine,
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_create_requires_user_before_validation() {
        let result = service().create_event(new_event("", "someday"), None).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_create_rejects_invalid_day() {
        let owner = ObjectId::new().to_hex();
        match service()
            .create_event(new_event("Gym", "Monday"), Some(owner.as_str()))
            .await
        {
            Err(AppError::ValidationError(errors)) => {
                assert_eq!(errors[0].field, "dayOfWeek");
                assert_eq!(errors[0].message, "Invalid day of the week");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_ownership_is_enforced() {
        let service = service();
        let alice = ObjectId::new().to_hex();
        let bob = ObjectId::new().to_hex();

        let event = service
            .create_event(new_event("Gym", "monday"), Some(alice.as_str()))
            .await
            .unwrap();
        assert_eq!(event.user_id, alice);

        assert!(matches!(
            service.get_event(&event.id, Some(bob.as_str())).await,
            Err(AppError::AuthorizationError(_))
        ));
        assert!(matches!(
            service.delete_event(&event.id, Some(bob.as_str())).await,
            Err(AppError::AuthorizationError(_))
        ));
        assert!(service.get_event(&event.id, Some(alice.as_str())).await.is_ok());
    }

    #[actix_web::test]
    async fn test_delete_twice_is_not_found() {
        let service = service();
        let owner = ObjectId::new().to_hex();
        let event = service
            .create_event(new_event("Gym", "monday"), Some(owner.as_str()))
            .await
            .unwrap();

        service.delete_event(&event.id, Some(owner.as_str())).await.unwrap();
        assert!(matches!(
            service.delete_event(&event.id, Some(owner.as_str())).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_event("xyz", Some(owner.as_str())).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_listing_is_owner_scoped() {
        let service = service();
        let alice = ObjectId::new().to_hex();
        let bob = ObjectId::new().to_hex();

        service
            .create_event(new_event("Gym", "monday"), Some(alice.as_str()))
            .await
            .unwrap();
        service
            .create_event(new_event("Yoga", "monday"), Some(bob.as_str()))
            .await
            .unwrap();

        let events = service
            .get_events(list(Some("monday"), None), Some(alice.as_str()))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].description, "Gym");

        match service
            .get_events(list(Some("friday"), Some(true)), Some(alice.as_str()))
            .await
        {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "No events created by this user."),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        match service
            .get_events(list(Some("friday"), None), Some(alice.as_str()))
            .await
        {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "No events found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_description_filter_is_case_insensitive() {
        let service = service();
        let owner = ObjectId::new().to_hex();
        service
            .create_event(new_event("Morning Gym (legs)", "tuesday"), Some(owner.as_str()))
            .await
            .unwrap();

        let query = EventListQuery {
            description: Some("gym (LEGS".to_string()),
            ..Default::default()
        };
        let events = service.get_events(query, Some(owner.as_str())).await.unwrap();
        assert_eq!(events.len(), 1);
    }

    #[actix_web::test]
    async fn test_bulk_delete_by_day() {
        let service = service();
        let alice = ObjectId::new().to_hex();
        let bob = ObjectId::new().to_hex();

        for description in ["Gym", "Groceries"] {
            service
                .create_event(new_event(description, "monday"), Some(alice.as_str()))
                .await
                .unwrap();
        }
        service
            .create_event(new_event("Dentist", "friday"), Some(alice.as_str()))
            .await
            .unwrap();
        service
            .create_event(new_event("Yoga", "monday"), Some(bob.as_str()))
            .await
            .unwrap();

        let query = DeleteEventsQuery {
            day_of_week: Some("monday".to_string()),
        };
        let deleted = service
            .delete_events(query.clone(), Some(alice.as_str()))
            .await
            .unwrap();
        assert_eq!(deleted.deleted_events.len(), 2);

        assert!(matches!(
            service.delete_events(query, Some(alice.as_str())).await,
            Err(AppError::NotFound(_))
        ));

        // 다른 요일과 다른 사용자의 이벤트는 남아 있음
        assert!(service.get_events(list(Some("friday"), None), Some(alice.as_str())).await.is_ok());
        assert!(service.get_events(list(Some("monday"), None), Some(bob.as_str())).await.is_ok());
    }

    #[actix_web::test]
    async fn test_bulk_delete_requires_valid_day() {
        let query = DeleteEventsQuery {
            day_of_week: Some("someday".to_string()),
        };
        let owner = ObjectId::new().to_hex();

        match service().delete_events(query, Some(owner.as_str())).await {
            Err(AppError::ValidationError(errors)) => {
                assert_eq!(errors[0].message, "Invalid day of the week.")
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_bulk_delete_reports_only_events_it_removed() {
        let service = EventService::new(Arc::new(RacingEventRepository {
            inner: InMemoryEventRepository::new(),
        }));
        let owner = ObjectId::new().to_hex();

        let gym = service
            .create_event(new_event("Gym", "monday"), Some(owner.as_str()))
            .await
            .unwrap();
        let groceries = service
            .create_event(new_event("Groceries", "monday"), Some(owner.as_str()))
            .await
            .unwrap();

        let query = DeleteEventsQuery {
            day_of_week: Some("monday".to_string()),
        };
        let deleted = service.delete_events(query, Some(owner.as_str())).await.unwrap();

        let ids: Vec<&str> = deleted.deleted_events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![groceries.id.as_str()]);
        assert!(!ids.contains(&gym.id.as_str()));
    }

    #[actix_web::test]
    async fn test_bulk_delete_losing_every_race_is_not_found() {
        let service = EventService::new(Arc::new(RacingEventRepository {
            inner: InMemoryEventRepository::new(),
        }));
        let owner = ObjectId::new().to_hex();
        service
            .create_event(new_event("Gym", "sunday"), Some(owner.as_str()))
            .await
            .unwrap();

        let query = DeleteEventsQuery {
            day_of_week: Some("sunday".to_string()),
        };
        assert!(matches!(
            service.delete_events(query, Some(owner.as_str())).await,
            Err(AppError::NotFound(_))
        ));
    }
}
