//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// `POST /api/v1/users/sign-in` 본문
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(
        required(message = "Email is required."),
        email(message = "Invalid email format.")
    )]
    pub email: Option<String>,

    #[validate(required(message = "Password is required."))]
    pub password: Option<String>,
}
