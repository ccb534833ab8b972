//! 이벤트 리포지토리 MongoDB 구현체

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use super::{EventFilter, EventRepository};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::events::Event;
use crate::utils::pagination::Page;

/// MongoDB 기반 이벤트 리포지토리
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    pub const COLLECTION_NAME: &'static str = "events";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Event>(Self::COLLECTION_NAME),
        }
    }

    /// 소유자 + 요일 복합 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_day_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "dayOfWeek": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_day_of_week".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(owner_day_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    async fn create(&self, mut event: Event) -> AppResult<Event> {
        let result = self
            .collection
            .insert_one(&event)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string())
        })?;
        event.id = Some(id);

        Ok(event)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Event>> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 음수 skip은 드라이버에 전달할 수 없으므로 `BadRequest`로 거절합니다.
    async fn find_many(&self, filter: &EventFilter, page: Page) -> AppResult<Vec<Event>> {
        let skip = u64::try_from(page.skip)
            .map_err(|_| AppError::BadRequest("Page must be a positive integer.".to_string()))?;

        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(page.limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<Event>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_many(&self, user_id: &ObjectId, ids: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
        let mut deleted = Vec::with_capacity(ids.len());

        // 문서별 delete_one 결과로 이 호출이 지운 ID를 확정
        for id in ids {
            let result = self
                .collection
                .delete_one(doc! { "_id": *id, "userId": *user_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if result.deleted_count > 0 {
                deleted.push(*id);
            }
        }

        Ok(deleted)
    }
}
