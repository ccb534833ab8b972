//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 설정과 리포지토리를 주입받아 한 번 생성되고,
//! [`crate::core::registry::AppServices`]를 통해 핸들러에 공유됩니다.
//!
//! - [`auth`] - 토큰, 비밀번호 해싱, 인증 확인
//! - [`users`] - 사용자 생명주기
//! - [`events`] - 사용자별 이벤트 관리

pub mod auth;
pub mod events;
pub mod users;
