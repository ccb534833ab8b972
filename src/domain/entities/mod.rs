//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 문서 구조를 정의합니다.

pub mod users;
pub mod events;
