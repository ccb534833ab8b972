//! 이벤트 스케줄러 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use event_scheduler_backend::config::{AppConfig, ServerConfig};
use event_scheduler_backend::core::registry::AppServices;
use event_scheduler_backend::db::Database;
use event_scheduler_backend::repositories::events::MongoEventRepository;
use event_scheduler_backend::repositories::users::MongoUserRepository;
use event_scheduler_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 이벤트 스케줄러 시작중...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };
    info!("실행 환경: {:?}", config.environment);

    let services = initialize_services(&config)
        .await
        .map_err(std::io::Error::other)?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, services).await
}

/// MongoDB 연결, 인덱스 생성, 서비스 구성을 차례로 수행합니다.
///
/// 연결이나 인덱스 생성에 실패하면 서버를 띄우지 않습니다.
async fn initialize_services(
    config: &AppConfig,
) -> Result<AppServices, event_scheduler_backend::core::AppError> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::new(&config.database).await?;

    let user_repo = MongoUserRepository::new(&database);
    let event_repo = MongoEventRepository::new(&database);

    user_repo.create_indexes().await?;
    event_repo.create_indexes().await?;
    info!("✅ 인덱스 준비 완료 ({})", database.database_name());

    Ok(AppServices::new(
        config,
        Arc::new(user_repo),
        Arc::new(event_repo),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limiting 설정 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, services: AppServices) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit = config.rate_limit;
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    let server_config = config.server.clone();

    HttpServer::new(move || {
        let cors = configure_cors(&server_config);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| services.register(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로만 알립니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=event_scheduler_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 지정된 Origin만 허용합니다.
fn configure_cors(server: &ServerConfig) -> Cors {
    let cors = server
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
