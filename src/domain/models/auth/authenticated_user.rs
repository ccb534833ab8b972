use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// 인증 미들웨어가 토큰에서 추출해 Request Extensions에 저장하는 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    pub user_id: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 걸리지 않은 라우트에서 사용하면 항상 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Not authenticated".to_string(),
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
///
/// 신원 확인을 서비스 계층의 권한 검사에 맡길 때 사용합니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.user_id.as_str())
    }
}

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
