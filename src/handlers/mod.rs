//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 연결하는 핸들러 함수들입니다.
//! 핸들러는 추출자로 입력을 받고, 서비스 결과를 상태 코드와 함께 JSON으로 돌려주는 일만 합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)     ← Web Layer
//!   ▼
//! Services               ← Service Layer
//!   ▼
//! Repositories           ← Repository Layer
//! ```
//!
//! 에러는 모두 [`AppError`](crate::core::errors::AppError)로 반환되며
//! `ResponseError` 구현이 HTTP 응답으로 변환합니다.

pub mod events;
pub mod users;
