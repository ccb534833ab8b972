//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별 리포지토리는 `async_trait` 기반 trait으로 정의되고,
//! 서비스 계층은 `Arc<dyn ...Repository>`만 알고 있습니다.
//!
//! - MongoDB 구현: [`users::MongoUserRepository`], [`events::MongoEventRepository`]
//! - 메모리 구현: [`memory::InMemoryUserRepository`], [`memory::InMemoryEventRepository`]
//!   (개발용 및 HTTP 통합 테스트용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo = MongoUserRepository::new(&database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod events;
pub mod memory;

use mongodb::error::{ErrorKind, WriteFailure};

/// MongoDB 유니크 인덱스 위반 에러 코드
pub(crate) const DUPLICATE_KEY_CODE: i32 = 11000;

/// 드라이버 에러가 유니크 인덱스 위반인지 확인합니다.
///
/// `insert_one`은 쓰기 에러로, `find_one_and_update`는 명령 에러로 보고합니다.
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
