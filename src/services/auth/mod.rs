//! 인증 및 보안 서비스 모듈
//!
//! - [`TokenService`] - HS256 JWT 발급/검증
//! - [`PasswordService`] - bcrypt 해싱
//! - [`require_user`] - 서비스 계층의 인증 확인
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(config.jwt.clone());
//! let token = token_service.issue(&user.id_string())?;
//! let claims = token_service.verify(&token)?;
//! ```

pub mod authorization;
pub mod password_service;
pub mod token_service;

pub use authorization::require_user;
pub use password_service::PasswordService;
pub use token_service::{TokenService, NOT_AUTHENTICATED_MESSAGE};
