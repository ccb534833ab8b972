//! 서비스 계층 인증 확인
//!
//! 미들웨어가 이미 걸러낸 요청이라도 서비스가 단독으로 호출될 수 있으므로
//! 사용자 식별자가 필요한 연산은 먼저 [`require_user`]를 거칩니다.

use super::token_service::NOT_AUTHENTICATED_MESSAGE;
use crate::core::errors::{AppError, AppResult};

/// 식별자가 없으면 401 `AuthenticationError`를 반환합니다.
pub fn require_user(user_id: Option<&str>) -> AppResult<&str> {
    user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::AuthenticationError(NOT_AUTHENTICATED_MESSAGE.to_string()))
}
