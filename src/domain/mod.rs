//! 도메인 계층
//!
//! - [`entities`] - MongoDB 문서와 대응하는 엔티티
//! - [`dto`] - HTTP 요청/응답 구조체
//! - [`models`] - 인증 토큰 클레임과 요청 컨텍스트 모델

pub mod entities;
pub mod dto;
pub mod models;
