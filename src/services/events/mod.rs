//! 이벤트 관리 서비스 모듈

pub mod event_service;

pub use event_service::EventService;
