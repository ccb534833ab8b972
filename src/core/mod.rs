//! # Core Module
//!
//! 애플리케이션 전반에서 쓰이는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드와 본문 결정
//! - **검증 연동**: `validator` 결과를 필드 에러 목록으로 변환
//!
//! ### [`registry`] - 서비스 구성
//! - **AppServices**: 설정과 리포지토리로 서비스 그래프를 한 번 구성
//! - **명시적 주입**: 전역 상태 대신 `web::Data`로 핸들러에 전달
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppResult, AppServices};
//!
//! let services = AppServices::new(&config, user_repo, event_repo);
//! App::new().configure(|cfg| services.register(cfg));
//! ```

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorContext, FieldError};
pub use registry::AppServices;
