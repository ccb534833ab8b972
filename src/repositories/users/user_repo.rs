//! 사용자 리포지토리 MongoDB 구현체
//!
//! `users` 컬렉션에 대한 CRUD를 제공합니다.
//! 이메일 유일성은 유니크 인덱스로 보장되며, 서비스 계층의 사전 확인을
//! 통과한 동시 가입 요청도 인덱스 위반으로 걸러집니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use super::{by_id, email_exists_error, UserChanges, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::is_duplicate_key;

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 사용자 컬렉션의 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출되며, 이미 존재하는 인덱스는 그대로 둡니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// - `email_unique`: 이메일 유니크 인덱스
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 데이터가 있는 경우 유니크 인덱스 생성 실패
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(by_id(id))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - `_id`가 채워진 사용자
    /// * `Err(AppError::ConflictError)` - 이메일 유니크 인덱스 위반
    /// * `Err(AppError::DatabaseError)` - 그 외 데이터베이스 오류
    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                email_exists_error()
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고, `ReturnDocument::After`로
    /// 변경 후 문서를 돌려받습니다. 변경할 필드가 없으면 조회만 수행합니다.
    async fn update(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        self.collection
            .find_one_and_update(by_id(id), doc! { "$set": changes.to_document() })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    email_exists_error()
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }
}
