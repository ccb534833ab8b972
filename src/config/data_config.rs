//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 패스워드 해싱, Rate Limiting 설정을 관리합니다.
//! 모든 값은 시작 시점에 한 번 읽혀 [`super::AppConfig`]에 담깁니다.

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub(crate) fn load(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    /// `BCRYPT_COST`가 유효 범위 안에 있으면 그 값을, 아니면 환경 기본값을 사용합니다.
    pub(crate) fn load(lookup: &impl Fn(&str) -> Option<String>, env: Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 포트 번호. 기본값: 8080
    pub port: u16,
    /// CORS 허용 Origin 목록
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn load(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(8080);

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        };

        Self {
            host,
            port,
            allowed_origins,
        }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub name: String,
}

impl DatabaseConfig {
    pub(crate) fn load(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| "event_scheduler_dev".to_string()),
        }
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn load(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .and_then(|v| match v.trim().parse::<u64>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", v);
                    None
                }
            })
            .unwrap_or(100);

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .and_then(|v| match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", v);
                    None
                }
            })
            .unwrap_or(200);

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("TEST"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override_is_range_checked() {
        let lookup = lookup_from(&[("BCRYPT_COST", "8")]);
        assert_eq!(PasswordConfig::load(&lookup, Environment::Production).bcrypt_cost, 8);

        let lookup = lookup_from(&[("BCRYPT_COST", "31")]);
        assert_eq!(PasswordConfig::load(&lookup, Environment::Staging).bcrypt_cost, 10);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::load(&lookup_from(&[]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = ServerConfig::load(&lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://app.example.com, https://admin.example.com,",
        )]));

        assert_eq!(
            config.allowed_origins,
            vec!["https://app.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn test_rate_limit_falls_back_on_garbage() {
        let config = RateLimitConfig::load(&lookup_from(&[
            ("RATE_LIMIT_PER_SECOND", "abc"),
            ("RATE_LIMIT_BURST_SIZE", "50"),
        ]));

        assert_eq!(config.per_second, 100);
        assert_eq!(config.burst_size, 50);
    }
}
