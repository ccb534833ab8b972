//! # Service Registry
//!
//! 애플리케이션 서비스 그래프를 시작 시점에 한 번 구성하고
//! Actix-Web 애플리케이션 데이터로 등록합니다.
//!
//! ## 구성 순서
//!
//! ```text
//! AppConfig ─┬─► TokenService (JwtConfig)
//!            └─► PasswordService (PasswordConfig)
//!
//! dyn UserRepository  ──► UserService (+ PasswordService, TokenService)
//! dyn EventRepository ──► EventService
//! ```
//!
//! 리포지토리는 trait 객체로 주입되므로 운영에서는 MongoDB 구현을,
//! 테스트에서는 메모리 구현을 같은 방식으로 연결합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let services = AppServices::new(&config, user_repo, event_repo);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| services.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::repositories::events::EventRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::events::EventService;
use crate::services::users::UserService;

/// 애플리케이션 전체에서 공유되는 서비스 묶음
///
/// 모든 필드는 `Arc`이므로 워커 스레드마다 복제해도 같은 인스턴스를 가리킵니다.
#[derive(Clone)]
pub struct AppServices {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
    pub event_service: Arc<EventService>,
}

impl AppServices {
    pub fn new(
        config: &AppConfig,
        user_repo: Arc<dyn UserRepository>,
        event_repo: Arc<dyn EventRepository>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(config.jwt.clone()));
        let password_service = PasswordService::new(config.password);

        let user_service = Arc::new(UserService::new(
            user_repo,
            password_service,
            token_service.clone(),
        ));
        let event_service = Arc::new(EventService::new(event_repo));

        log::debug!(
            "서비스 구성 완료 (bcrypt cost {}, 토큰 유효 {}초)",
            config.password.bcrypt_cost,
            config.jwt.expiration_seconds
        );

        Self {
            token_service,
            user_service,
            event_service,
        }
    }

    /// 각 서비스를 `web::Data<T>`로 등록합니다.
    ///
    /// 핸들러는 `web::Data<UserService>`처럼 구체 타입으로 꺼내 씁니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.event_service.clone()));
    }
}
