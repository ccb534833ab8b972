//! # Application Error Handling System
//!
//! 이벤트 스케줄러 백엔드의 통합 에러 처리 시스템입니다.
//! 서비스 계층은 항상 [`AppError`]를 반환하고, HTTP 경계에서
//! `ResponseError` 구현 하나가 상태 코드와 응답 본문을 결정합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `{"type": "Validation Error", "errors": [...]}` |
//! | `ConflictError` | 400 Bad Request | 검증 에러와 같은 형식 (단일 항목) |
//! | `BadRequest` | 400 Bad Request | `{"statusCode", "error", "message"}` |
//! | `AuthenticationError` | 401 Unauthorized | 〃 |
//! | `AuthorizationError` | 403 Forbidden | 〃 |
//! | `NotFound` | 404 Not Found | 〃 |
//! | `DatabaseError` | 500 Internal Server Error | 일반 메시지, 상세 내용은 로그에만 기록 |
//! | `InternalError` | 500 Internal Server Error | 〃 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_event(&self, id: &str) -> AppResult<Event> {
//!     let object_id = parse_object_id(id, "Invalid event ID format.")?;
//!     self.event_repo
//!         .find_by_id(&object_id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Event not found.".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 5xx 응답에서 클라이언트에게 노출하는 유일한 메시지
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// 필드 단위 검증 실패 정보
///
/// 클라이언트에는 `{"field": "firstName", "message": "..."}` 형태로 전달됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를
/// 구현하여 핸들러에서 `?`만으로 HTTP 응답으로 변환됩니다.
///
/// ## 에러 카테고리
///
/// - 입력 계층: `ValidationError`, `ConflictError`, `BadRequest`
/// - 보안 계층: `AuthenticationError`, `AuthorizationError`
/// - 리소스 계층: `NotFound`
/// - 인프라 계층: `DatabaseError`, `InternalError`
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 실패를 나타냅니다. 원본 메시지는 로그에만 남습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 선언적 검증 실패
    ///
    /// 요청 본문이나 쿼리에서 발견된 모든 위반 사항을 담습니다.
    #[error("Validation error: {}", summarize(.0))]
    ValidationError(Vec<FieldError>),

    /// 형식은 맞지만 처리할 수 없는 요청
    ///
    /// 잘못된 ObjectId, 파싱할 수 없는 JSON 본문 등에 사용됩니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 요청된 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터
    ///
    /// 이미 가입된 이메일처럼 특정 필드 값이 충돌하는 경우입니다.
    /// 클라이언트에는 검증 에러와 같은 형식으로 전달됩니다.
    #[error("Conflict error: {}", .0.message)]
    ConflictError(FieldError),

    /// 인증 실패
    ///
    /// 토큰 누락/위조/만료, 로그인 실패 등.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족
    ///
    /// 인증은 되었지만 다른 사용자의 리소스에 접근하려는 경우입니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// 단일 필드 검증 에러를 생성합니다.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, message)])
    }

    /// 클라이언트에게 전달할 메시지
    ///
    /// 5xx 계열은 내부 정보를 숨기기 위해 항상 일반 메시지를 사용합니다.
    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::ConflictError(err) => err.message.clone(),
            AppError::ValidationError(errors) => summarize(errors),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ConflictError(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 계열은 필드 목록을, 나머지는 `{statusCode, error, message}` 형식을 사용합니다.
    /// 5xx 에러는 상세 내용을 서버 로그에만 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        match self {
            AppError::ValidationError(errors) => {
                return actix_web::HttpResponse::build(status).json(serde_json::json!({
                    "type": "Validation Error",
                    "errors": errors,
                }));
            }
            AppError::ConflictError(error) => {
                return actix_web::HttpResponse::build(status).json(serde_json::json!({
                    "type": "Validation Error",
                    "errors": [error],
                }));
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("처리되지 않은 서버 에러: {}", self);
            }
            _ => {}
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.client_message(),
        }))
    }
}

/// `validator` 크레이트의 검증 결과를 필드 에러 목록으로 변환합니다.
///
/// 필드 이름은 클라이언트 JSON과 같은 camelCase로 바꾸고,
/// 응답 순서가 매번 같도록 필드 이름 기준으로 정렬합니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = Vec::new();

        for (field, kind) in errors.errors() {
            if let ValidationErrorsKind::Field(list) = kind {
                for error in list {
                    // 구조체 수준(schema) 검증은 "__all__"로 모이므로 `field` 파라미터로 대상 필드를 지정합니다.
                    let name = if *field == "__all__" {
                        error
                            .params
                            .get("field")
                            .and_then(|v| v.as_str())
                            .map(String::from)
                            .unwrap_or_else(|| "body".to_string())
                    } else {
                        to_camel_case(field)
                    };
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", name));
                    fields.push(FieldError::new(name, message));
                }
            }
        }

        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(fields)
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// 애플리케이션 결과 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러에 컨텍스트를 붙여 `InternalError`로 변환합니다.
///
/// ```rust,ignore
/// let hash = web::block(move || bcrypt::hash(plain, cost))
///     .await
///     .context("비밀번호 해싱 작업 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use validator::ValidationError;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::field("email", "Email is required.").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ConflictError(FieldError::new("email", "This email already exists")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("Event not found.".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AuthenticationError("Not authenticated".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::AuthorizationError("nope".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::DatabaseError("connection reset".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_validation_error_body() {
        let body = body_json(AppError::field("dayOfWeek", "Invalid day of the week")).await;

        assert_eq!(body["type"], "Validation Error");
        assert_eq!(body["errors"][0]["field"], "dayOfWeek");
        assert_eq!(body["errors"][0]["message"], "Invalid day of the week");
    }

    #[actix_web::test]
    async fn test_conflict_uses_validation_shape() {
        let body = body_json(AppError::ConflictError(FieldError::new(
            "email",
            "This email already exists",
        )))
        .await;

        assert_eq!(body["type"], "Validation Error");
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let body = body_json(AppError::DatabaseError("E11000 at node-3".into())).await;

        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], GENERIC_ERROR_MESSAGE);
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let body = body_json(AppError::NotFound("No events found".into())).await;

        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "No events found");
    }

    #[test]
    fn test_from_validation_errors_camel_cases_and_sorts() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "last_name",
            ValidationError::new("required").with_message("Last name is required.".into()),
        );
        errors.add(
            "first_name",
            ValidationError::new("required").with_message("First name is required.".into()),
        );

        match AppError::from(errors) {
            AppError::ValidationError(fields) => {
                assert_eq!(fields[0], FieldError::new("firstName", "First name is required."));
                assert_eq!(fields[1], FieldError::new("lastName", "Last name is required."));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
