//! JWT 액세스 토큰 클레임

use serde::{Deserialize, Serialize};

/// 토큰 페이로드
///
/// ```json
/// { "userId": "665f1c...", "iat": 1717000000, "exp": 1717003600 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// 발급 시각 (UNIX 초)
    pub iat: i64,
    /// 만료 시각 (UNIX 초)
    pub exp: i64,
}
