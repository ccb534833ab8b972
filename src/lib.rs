//! 이벤트 스케줄러 백엔드
//!
//! 사용자가 요일별 이벤트를 등록하고 관리하는 멀티 테넌트 REST API 서비스입니다.
//! 모든 이벤트는 소유자 단위로 격리되며 JWT Bearer 토큰으로 사용자를 식별합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 본인 정보 수정
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **이벤트 관리**: 생성, 조건/페이지 조회, 단건 삭제, 요일 단위 일괄 삭제
//! - **MongoDB**: 사용자/이벤트 영구 저장 (테스트는 메모리 저장소)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 소유권 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← dyn trait (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use event_scheduler_backend::config::AppConfig;
//! use event_scheduler_backend::core::registry::AppServices;
//! use event_scheduler_backend::routes::configure_all_routes;
//!
//! let config = AppConfig::from_env()?;
//! let services = AppServices::new(&config, user_repo, event_repo);
//!
//! App::new()
//!     .configure(|cfg| services.register(cfg))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
