//! 메모리 기반 리포지토리 구현체
//!
//! MongoDB 구현과 같은 의미(이메일 유일성, `_id` 오름차순 정렬, 소유자 조건)를
//! 프로세스 메모리 안에서 제공합니다. HTTP 통합 테스트와 로컬 개발에 사용합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::events::{EventFilter, EventRepository};
use super::users::{email_exists_error, UserChanges, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::events::Event;
use crate::domain::entities::users::User;
use crate::utils::pagination::Page;

/// 메모리 기반 사용자 리포지토리
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(email_exists_error());
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;

        if let Some(email) = &changes.email {
            if users
                .iter()
                .any(|u| &u.email == email && u.id.as_ref() != Some(id))
            {
                return Err(email_exists_error());
            }
        }

        match users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            Some(user) => {
                changes.apply(user);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

/// 메모리 기반 이벤트 리포지토리
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, mut event: Event) -> AppResult<Event> {
        let mut events = self.events.write().await;

        event.id = Some(ObjectId::new());
        events.push(event.clone());

        Ok(event)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id.as_ref() == Some(id)).cloned())
    }

    async fn find_many(&self, filter: &EventFilter, page: Page) -> AppResult<Vec<Event>> {
        let skip = usize::try_from(page.skip)
            .map_err(|_| AppError::BadRequest("Page must be a positive integer.".to_string()))?;
        let limit = usize::try_from(page.limit)
            .ok()
            .filter(|limit| *limit > 0)
            .unwrap_or(usize::MAX);

        let events = self.events.read().await;

        Ok(events
            .iter()
            .filter(|e| filter.matches(e))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id.as_ref() != Some(id));

        Ok(events.len() < before)
    }

    async fn delete_many(&self, user_id: &ObjectId, ids: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
        let mut events = self.events.write().await;
        let mut deleted = Vec::new();
        events.retain(|e| match e.id {
            Some(id) if e.is_owned_by(user_id) && ids.contains(&id) => {
                deleted.push(id);
                false
            }
            _ => true,
        });

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::events::DayOfWeek;
    use crate::utils::pagination::paginate;
    use chrono::NaiveDate;

    fn user(email: &str) -> User {
        User::new(
            "Maria".to_string(),
            "Silva".to_string(),
            NaiveDate::from_ymd_opt(1992, 4, 15).unwrap(),
            "Lisboa".to_string(),
            "Portugal".to_string(),
            email.to_string(),
            "hash".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_user_email_is_unique() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("maria@example.com")).await.unwrap();

        let result = repo.create(user("maria@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_user_update() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("maria@example.com")).await.unwrap();
        repo.create(user("joao@example.com")).await.unwrap();
        let id = created.id.unwrap();

        let changes = UserChanges {
            city: Some("Porto".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&id, changes).await.unwrap().unwrap();
        assert_eq!(updated.city, "Porto");

        let taken = UserChanges {
            email: Some("joao@example.com".to_string()),
            ..Default::default()
        };
        assert!(repo.update(&id, taken).await.is_err());

        let own = UserChanges {
            email: Some("maria@example.com".to_string()),
            ..Default::default()
        };
        assert!(repo.update(&id, own).await.is_ok());

        assert!(repo.update(&ObjectId::new(), UserChanges::default()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_event_pagination_and_bulk_delete() {
        let repo = InMemoryEventRepository::new();
        let owner = ObjectId::new();
        let other = ObjectId::new();

        for i in 0..7 {
            repo.create(Event::new(format!("event {}", i), DayOfWeek::Monday, owner))
                .await
                .unwrap();
        }
        repo.create(Event::new("foreign".to_string(), DayOfWeek::Monday, other))
            .await
            .unwrap();

        let filter = EventFilter::owned_by(owner);
        let second_page = repo.find_many(&filter, paginate(2, 5)).await.unwrap();
        assert_eq!(second_page.len(), 2);
        assert_eq!(second_page[0].description, "event 5");

        assert!(repo.find_many(&filter, paginate(0, 5)).await.is_err());

        let mine = repo.find_many(&filter, paginate(1, 100)).await.unwrap();
        let ids: Vec<ObjectId> = mine.iter().filter_map(|e| e.id).collect();

        // 다른 사용자의 소유자 ID로는 삭제되지 않음
        assert!(repo.delete_many(&other, &ids).await.unwrap().is_empty());
        assert_eq!(repo.delete_many(&owner, &ids).await.unwrap(), ids);
        assert!(repo.delete_many(&owner, &ids).await.unwrap().is_empty());

        let remaining = repo
            .find_many(&EventFilter::owned_by(other), Page::ALL)
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[actix_web::test]
    async fn test_event_delete_by_id_twice() {
        let repo = InMemoryEventRepository::new();
        let event = repo
            .create(Event::new("Gym".to_string(), DayOfWeek::Monday, ObjectId::new()))
            .await
            .unwrap();
        let id = event.id.unwrap();

        assert!(repo.delete_by_id(&id).await.unwrap());
        assert!(!repo.delete_by_id(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }
}
