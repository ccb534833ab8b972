//! # 사용자 정보 수정 요청 DTO
//!
//! `PUT /api/v1/users/{id}` 본문입니다. 모든 필드가 선택이며,
//! 전달된 필드에만 회원가입과 같은 규칙이 적용됩니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::create_user::passwords_mismatch;
use crate::utils::validation::{
    validate_birth_date, validate_city, validate_country, validate_first_name, validate_last_name,
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_passwords_match", skip_on_field_errors = false))]
pub struct UpdateUserRequest {
    #[validate(
        length(max = 20, message = "First name must be at most 20 characters long."),
        custom(function = "validate_first_name")
    )]
    pub first_name: Option<String>,

    #[validate(
        length(max = 50, message = "Last name must be at most 50 characters long."),
        custom(function = "validate_last_name")
    )]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: Option<String>,

    #[validate(custom(function = "validate_city"))]
    pub city: Option<String>,

    #[validate(custom(function = "validate_country"))]
    pub country: Option<String>,

    #[validate(email(message = "Invalid email format."))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long."))]
    pub password: Option<String>,

    pub confirm_password: Option<String>,
}

fn validate_update_passwords_match(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    passwords_mismatch(req.password.as_deref(), req.confirm_password.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_is_valid() {
        let req = UpdateUserRequest {
            city: Some("Porto".to_string()),
            ..Default::default()
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_supplied_fields_are_checked() {
        let req = UpdateUserRequest {
            first_name: Some("A".repeat(21)),
            country: Some("Country123".to_string()),
            birth_date: Some("1990-01-01".to_string()),
            ..Default::default()
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("country"));
        assert!(fields.contains_key("birth_date"));
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateUserRequest::default().validate().is_ok());
    }
}
