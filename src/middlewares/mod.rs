//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 JWT 추출 및 검증
//! - 검증된 사용자 정보를 request extension에 저장
//! - 실패 사유와 관계없이 동일한 401 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/events")
//!             .wrap(AuthMiddleware)
//!             .service(create_event)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
