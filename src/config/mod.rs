//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수는 시작 시점에 [`AppConfig::from_env`]에서 한 번만 읽히고,
//! 이후에는 구성된 구조체가 각 서비스에 명시적으로 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 해싱, Rate Limiting 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="event_scheduler_dev"
//! export JWT_EXPIRATION_SECONDS="3600"
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::core::errors::AppError;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_SECRET`이 없거나 비어 있는 경우
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로 설정을 구성합니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let environment = Environment::load(&lookup);

        Ok(Self {
            environment,
            server: ServerConfig::load(&lookup),
            database: DatabaseConfig::load(&lookup),
            jwt: JwtConfig::load(&lookup)?,
            password: PasswordConfig::load(&lookup, environment),
            rate_limit: RateLimitConfig::load(&lookup),
        })
    }
}
