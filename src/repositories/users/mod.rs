//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] trait과 MongoDB 구현 [`MongoUserRepository`]를 제공합니다.

pub mod user_repo;

pub use user_repo::MongoUserRepository;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};

use crate::core::errors::{AppError, AppResult, FieldError};
use crate::domain::entities::users::User;

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일 주소로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 새 사용자 저장
    ///
    /// 이메일이 이미 존재하면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 부분 업데이트 후 최신 상태를 반환합니다. 대상이 없으면 `None`.
    async fn update(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>>;
}

/// 사용자 부분 업데이트 내용
///
/// 값이 `Some`인 필드만 변경됩니다. 비밀번호는 이미 해시된 값이어야 합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTime>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        *self == UserChanges::default()
    }

    /// MongoDB `$set` 연산에 쓰는 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(v) = &self.first_name {
            set.insert("firstName", v.as_str());
        }
        if let Some(v) = &self.last_name {
            set.insert("lastName", v.as_str());
        }
        if let Some(v) = self.birth_date {
            set.insert("birthDate", v);
        }
        if let Some(v) = &self.city {
            set.insert("city", v.as_str());
        }
        if let Some(v) = &self.country {
            set.insert("country", v.as_str());
        }
        if let Some(v) = &self.email {
            set.insert("email", v.as_str());
        }
        if let Some(v) = &self.password_hash {
            set.insert("password", v.as_str());
        }
        set
    }

    /// 메모리 상의 엔티티에 같은 변경을 적용합니다.
    pub fn apply(self, user: &mut User) {
        let UserChanges {
            first_name,
            last_name,
            birth_date,
            city,
            country,
            email,
            password_hash,
        } = self;

        if let Some(v) = first_name {
            user.first_name = v;
        }
        if let Some(v) = last_name {
            user.last_name = v;
        }
        if let Some(v) = birth_date {
            user.birth_date = v;
        }
        if let Some(v) = city {
            user.city = v;
        }
        if let Some(v) = country {
            user.country = v;
        }
        if let Some(v) = email {
            user.email = v;
        }
        if let Some(v) = password_hash {
            user.password = v;
        }
    }
}

/// 이메일 중복 시 클라이언트에 전달하는 필드 에러
pub fn email_exists_error() -> AppError {
    AppError::ConflictError(FieldError::new("email", "This email already exists"))
}

/// `{"_id": id}` 필터
pub(crate) fn by_id(id: &ObjectId) -> Document {
    doc! { "_id": *id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_to_document_only_has_set_fields() {
        let changes = UserChanges {
            city: Some("Porto".to_string()),
            password_hash: Some("$2b$04$x".to_string()),
            ..Default::default()
        };

        let document = changes.to_document();

        assert_eq!(document.len(), 2);
        assert_eq!(document.get_str("city").unwrap(), "Porto");
        assert_eq!(document.get_str("password").unwrap(), "$2b$04$x");
    }

    #[test]
    fn test_empty_changes() {
        assert!(UserChanges::default().is_empty());
        assert!(UserChanges::default().to_document().is_empty());
    }
}
