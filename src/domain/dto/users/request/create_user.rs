//! # 회원가입 요청 DTO
//!
//! `POST /api/v1/users/sign-up` 본문을 표현합니다.
//! 모든 필드를 `Option`으로 받아 누락된 필드도 "required" 메시지로 수집하고,
//! 하나의 요청에서 발견된 모든 위반 사항을 한 번에 돌려줍니다.
//!
//! 이메일 중복 여부는 저장소를 조회해야 하므로 서비스 계층에서 검증합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "firstName": "Maria",
//!   "lastName": "Silva",
//!   "birthDate": "15/04/1992",
//!   "city": "Lisboa",
//!   "country": "Portugal",
//!   "email": "maria@example.com",
//!   "password": "password123",
//!   "confirmPassword": "password123"
//! }
//! ```

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::validation::{
    validate_birth_date, validate_city, validate_country, validate_first_name, validate_last_name,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_passwords_match", skip_on_field_errors = false))]
pub struct CreateUserRequest {
    #[validate(
        required(message = "First name is required."),
        length(max = 20, message = "First name must be at most 20 characters long."),
        custom(function = "validate_first_name")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name is required."),
        length(max = 50, message = "Last name must be at most 50 characters long."),
        custom(function = "validate_last_name")
    )]
    pub last_name: Option<String>,

    /// `DD/MM/YYYY`
    #[validate(
        required(message = "Birth date is required."),
        custom(function = "validate_birth_date")
    )]
    pub birth_date: Option<String>,

    #[validate(required(message = "City is required."), custom(function = "validate_city"))]
    pub city: Option<String>,

    #[validate(required(message = "Country is required."), custom(function = "validate_country"))]
    pub country: Option<String>,

    #[validate(
        required(message = "Email is required."),
        email(message = "Invalid email format.")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required."),
        length(min = 6, message = "Password must be at least 6 characters long.")
    )]
    pub password: Option<String>,

    #[validate(required(message = "Confirm password is required"))]
    pub confirm_password: Option<String>,
}

/// 두 비밀번호가 모두 있을 때만 일치 여부를 확인합니다.
/// 누락은 필드별 `required` 규칙이 보고합니다.
pub(crate) fn passwords_mismatch(
    password: Option<&str>,
    confirm_password: Option<&str>,
) -> Result<(), ValidationError> {
    match (password, confirm_password) {
        (Some(password), Some(confirm)) if password != confirm => {
            let mut error = ValidationError::new("passwords_mismatch")
                .with_message("Passwords must match".into());
            error.add_param("field".into(), &"confirmPassword");
            Err(error)
        }
        _ => Ok(()),
    }
}

fn validate_passwords_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    passwords_mismatch(req.password.as_deref(), req.confirm_password.as_deref())
}
