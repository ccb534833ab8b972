//! # 필드 검증 규칙
//!
//! `validator` derive의 `custom(function = ...)`에서 사용하는 규칙 함수와
//! 경로 파라미터/날짜 파싱 도우미를 모아둔 모듈입니다.
//! 각 규칙은 실패 시 클라이언트에 그대로 노출되는 메시지를 담은 `ValidationError`를 반환합니다.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use validator::ValidationError;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::events::DayOfWeek;
use crate::utils::string_utils::{is_blank, is_letters_only};

pub const BIRTH_DATE_FORMAT_MESSAGE: &str = "Invalid birth date format. Please use DD/MM/YYYY";
pub const BIRTH_DATE_INVALID_MESSAGE: &str = "Invalid birth date";
pub const DAY_OF_WEEK_INVALID_MESSAGE: &str = "Invalid day of the week";

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn name_like(
    value: &str,
    empty_message: &'static str,
    letters_message: &'static str,
) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(failure("blank", empty_message));
    }
    if !is_letters_only(value.trim()) {
        return Err(failure("letters_only", letters_message));
    }
    Ok(())
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    name_like(value, "First name cannot be empty", "First name must only contain letters.")
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    name_like(value, "Last name cannot be empty", "Last name must only contain letters.")
}

pub fn validate_city(value: &str) -> Result<(), ValidationError> {
    name_like(value, "City cannot be empty", "City must only contain letters.")
}

pub fn validate_country(value: &str) -> Result<(), ValidationError> {
    name_like(value, "Country cannot be empty", "Country must only contain letters.")
}

pub fn validate_birth_date(value: &str) -> Result<(), ValidationError> {
    parse_birth_date(value).map(|_| ()).map_err(|e| match e {
        BirthDateError::Format => failure("birth_date_format", BIRTH_DATE_FORMAT_MESSAGE),
        BirthDateError::Invalid => failure("birth_date", BIRTH_DATE_INVALID_MESSAGE),
    })
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(failure("blank", "Description is required."));
    }
    Ok(())
}

pub fn validate_day_of_week(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<DayOfWeek>()
        .map(|_| ())
        .map_err(|_| failure("day_of_week", DAY_OF_WEEK_INVALID_MESSAGE))
}

/// 생년월일 파싱 실패 원인
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDateError {
    /// `DD/MM/YYYY` 형태가 아님
    Format,
    /// 형태는 맞지만 달력에 없는 날짜 (예: 31/02/1990)
    Invalid,
}

/// `DD/MM/YYYY` 문자열을 달력 날짜로 파싱합니다.
///
/// chrono는 한 자리 일/월도 받아들이므로 자릿수는 직접 확인합니다.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, BirthDateError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(BirthDateError::Format);
    }

    NaiveDate::parse_from_str(value, "%d/%m/%Y").map_err(|_| BirthDateError::Invalid)
}

/// 경로 파라미터를 ObjectId로 파싱합니다. 실패 시 400 `BadRequest`.
pub fn parse_object_id(id: &str, message: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(result: Result<(), ValidationError>) -> String {
        result
            .unwrap_err()
            .message
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("01/01/1990"),
            Ok(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
        );
        assert_eq!(parse_birth_date("1990-01-01"), Err(BirthDateError::Format));
        assert_eq!(parse_birth_date("1/1/1990"), Err(BirthDateError::Format));
        assert_eq!(parse_birth_date("31/02/1990"), Err(BirthDateError::Invalid));
        assert!(parse_birth_date("29/02/2024").is_ok());
    }

    #[test]
    fn test_birth_date_messages() {
        assert_eq!(message_of(validate_birth_date("1990-01-01")), BIRTH_DATE_FORMAT_MESSAGE);
        assert_eq!(message_of(validate_birth_date("32/01/1990")), BIRTH_DATE_INVALID_MESSAGE);
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_first_name("Maria").is_ok());
        assert_eq!(message_of(validate_first_name("   ")), "First name cannot be empty");
        assert_eq!(message_of(validate_first_name("M4ria")), "First name must only contain letters.");
        assert_eq!(message_of(validate_city("City123")), "City must only contain letters.");
        assert_eq!(message_of(validate_country("")), "Country cannot be empty");
    }

    #[test]
    fn test_day_of_week_rule() {
        assert!(validate_day_of_week("friday").is_ok());
        assert_eq!(message_of(validate_day_of_week("someday")), DAY_OF_WEEK_INVALID_MESSAGE);
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "bad").unwrap(), id);

        match parse_object_id("not-an-id", "Invalid event ID format.") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid event ID format."),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}
