//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 비밀키와 토큰 만료 시간을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_SECONDS="3600"
//! ```

use crate::core::errors::AppError;

/// JWT 토큰 설정
///
/// 비밀키가 없으면 서비스가 준비 상태가 되지 않도록 시작 단계에서 실패합니다.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    /// HS256 서명 비밀키
    pub secret: String,
    /// 토큰 유효 시간 (초). 기본값: 3600
    pub expiration_seconds: i64,
}

impl JwtConfig {
    pub const DEFAULT_EXPIRATION_SECONDS: i64 = 3600;

    pub fn new(secret: impl Into<String>, expiration_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_seconds,
        }
    }

    pub(crate) fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::InternalError("JWT_SECRET 환경 변수가 설정되지 않았습니다".to_string())
            })?;

        let expiration_seconds = lookup("JWT_EXPIRATION_SECONDS")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_EXPIRATION_SECONDS);

        Ok(Self {
            secret,
            expiration_seconds,
        })
    }
}

// 비밀키가 로그에 찍히지 않도록 직접 구현
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}
