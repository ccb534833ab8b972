//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator` derive로 선언적 검증 규칙을 갖고,
//! 응답 DTO는 엔티티에서 공개 가능한 필드만 추려낸 뷰입니다.

pub mod users;
pub mod events;
