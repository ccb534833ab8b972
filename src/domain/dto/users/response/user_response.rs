//! 사용자 응답 DTO
//!
//! 외부로 나가는 사용자 표현은 모두 이 모듈을 거칩니다.
//! 비밀번호 해시는 구조체에 필드 자체가 없으므로 어떤 직렬화 경로로도 노출되지 않습니다.

use serde::Serialize;

use crate::domain::entities::users::User;

/// 공개 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// `DD/MM/YYYY`
    pub birth_date: String,
    pub city: String,
    pub country: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string();
        let birth_date = user.birth_date_display();

        let User {
            first_name,
            last_name,
            city,
            country,
            email,
            ..
        } = user;

        Self {
            id,
            first_name,
            last_name,
            birth_date,
            city,
            country,
            email,
        }
    }
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl LoginResponse {
    pub fn new(token: String, user: UserResponse) -> Self {
        Self {
            token,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}
