//! JWT 액세스 토큰 서비스
//!
//! HS256으로 서명된 액세스 토큰을 발급하고 검증합니다.
//! 리프레시 토큰이나 폐기 목록은 없으며 만료 시각이 토큰의 유일한 수명 제한입니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenClaims;

/// 인증 실패 시 클라이언트에게 전달하는 단일 메시지
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated";

fn not_authenticated() -> AppError {
    AppError::AuthenticationError(NOT_AUTHENTICATED_MESSAGE.to_string())
}

/// JWT 토큰 관리 서비스
///
/// 서명 키는 생성 시점에 한 번 만들어 재사용합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_seconds: i64,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiration_seconds: config.expiration_seconds,
        }
    }

    /// 사용자 ID를 담은 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue(&self, user_id: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + self.expiration_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰의 서명과 만료 시각을 검증하고 클레임을 반환합니다.
    ///
    /// 형식 오류, 서명 불일치, 만료 등 모든 실패는 같은 401 에러가 됩니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                not_authenticated()
            })
    }

    /// `Authorization` 헤더 값에서 `Bearer ` 뒤의 토큰을 꺼냅니다.
    pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(not_authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl: i64) -> TokenService {
        TokenService::new(JwtConfig::new("test-secret", ttl))
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service(3600);
        let token = service.issue("665f1c2a9b1e8a3d4c5b6a79").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user_id, "665f1c2a9b1e8a3d4c5b6a79");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service(-60);
        let token = service.issue("665f1c2a9b1e8a3d4c5b6a79").unwrap();

        match service.verify(&token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, NOT_AUTHENTICATED_MESSAGE),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let token = TokenService::new(JwtConfig::new("other-secret", 3600))
            .issue("665f1c2a9b1e8a3d4c5b6a79")
            .unwrap();

        assert!(service(3600).verify(&token).is_err());
        assert!(service(3600).verify("not.a.jwt").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(TokenService::extract_bearer_token("Basic abc").is_err());
        assert!(TokenService::extract_bearer_token("Bearer ").is_err());
        assert!(TokenService::extract_bearer_token("abc.def").is_err());
    }
}
