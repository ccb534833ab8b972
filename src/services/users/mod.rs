//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, 프로필 수정을 담당합니다.
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
