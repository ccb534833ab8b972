//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 사용자 정보 수정의 비즈니스 규칙을 구현합니다.
//!
//! ```text
//! handlers::users ──► UserService ──► dyn UserRepository (MongoDB / 메모리)
//!                         │
//!                         ├─► PasswordService (bcrypt)
//!                         └─► TokenService (JWT)
//! ```
//!
//! ## 보안 규칙
//!
//! - 응답에는 항상 [`UserResponse`] 투영만 사용하며 비밀번호 해시는 포함되지 않습니다.
//! - 로그인 실패는 이메일이 없는 경우와 비밀번호가 틀린 경우를 구분하지 않습니다.
//! - 이메일 유일성은 요청 검증이 아니라 이 서비스와 저장소의 유니크 인덱스가 책임집니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{
    CreateUserRequest, LoginResponse, LoginUserRequest, UpdateUserRequest, UserResponse,
};
use crate::domain::entities::users::user::to_bson_date;
use crate::domain::entities::users::User;
use crate::repositories::users::{email_exists_error, UserChanges, UserRepository};
use crate::services::auth::{require_user, PasswordService, TokenService};
use crate::utils::validation::{parse_birth_date, parse_object_id, BIRTH_DATE_INVALID_MESSAGE};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    password_service: PasswordService,
    token_service: Arc<TokenService>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            token_service,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 중복 확인 (다른 필드의 유효성과 무관하게 충돌 우선)
    /// 2. 요청 검증 (모든 위반 사항 수집)
    /// 3. 생년월일 파싱, 비밀번호 해싱
    /// 4. 저장 후 공개 정보만 반환
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자의 공개 정보
    /// * `Err(AppError::ValidationError)` - 입력값 검증 실패
    /// * `Err(AppError::ConflictError)` - 이미 가입된 이메일
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        if let Some(email) = request.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if self.user_repo.find_by_email(email).await?.is_some() {
                log::info!("이미 가입된 이메일로 회원가입 시도");
                return Err(email_exists_error());
            }
        }

        request.validate()?;

        let CreateUserRequest {
            first_name: Some(first_name),
            last_name: Some(last_name),
            birth_date: Some(birth_date),
            city: Some(city),
            country: Some(country),
            email: Some(email),
            password: Some(password),
            ..
        } = request
        else {
            return Err(AppError::InternalError(
                "검증을 통과한 회원가입 요청에 누락된 필드가 있습니다".to_string(),
            ));
        };

        let birth_date = parse_birth_date(&birth_date)
            .map_err(|_| AppError::field("birthDate", BIRTH_DATE_INVALID_MESSAGE))?;
        let password_hash = self.password_service.hash(&password).await?;

        let user = User::new(
            first_name.trim().to_string(),
            last_name.trim().to_string(),
            birth_date,
            city.trim().to_string(),
            country.trim().to_string(),
            email,
            password_hash,
        );

        let created = self.user_repo.create(user).await?;
        log::info!(
            "사용자 생성 완료: {} ({:?})",
            created.id_string(),
            start_time.elapsed()
        );

        Ok(UserResponse::from(created))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공하면 사용자 ID를 담은 액세스 토큰과 기본 프로필을 반환합니다.
    /// 실패 원인과 관계없이 같은 400 응답을 돌려줍니다.
    pub async fn login_user(&self, request: LoginUserRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let (Some(email), Some(password)) = (request.email, request.password) else {
            return Err(invalid_credentials());
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            log::info!("로그인 실패: 등록되지 않은 이메일");
            return Err(invalid_credentials());
        };

        if !self.password_service.verify(&password, &user.password).await? {
            log::info!("로그인 실패: 비밀번호 불일치 (user {})", user.id_string());
            return Err(invalid_credentials());
        }

        let token = self.token_service.issue(&user.id_string())?;
        log::info!("로그인 성공: {}", user.id_string());

        Ok(LoginResponse::new(token, UserResponse::from(user)))
    }

    /// 사용자 정보 부분 수정
    ///
    /// 토큰의 사용자와 경로의 사용자가 같아야 합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::BadRequest)` - 잘못된 ID 형식
    /// * `Err(AppError::AuthorizationError)` - 다른 사용자의 정보 수정 시도
    /// * `Err(AppError::ConflictError)` - 다른 사용자가 사용 중인 이메일
    /// * `Err(AppError::NotFound)` - 사용자 없음
    pub async fn update_user(
        &self,
        auth_user_id: Option<&str>,
        id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let auth_user_id = require_user(auth_user_id)?;
        let user_id = parse_object_id(id, "Invalid user ID format.")?;

        if auth_user_id != user_id.to_hex() {
            return Err(AppError::AuthorizationError(
                "You are not allowed to update this user.".to_string(),
            ));
        }

        request.validate()?;
        let changes = self.build_changes(&user_id, request).await?;

        let updated = self
            .user_repo
            .update(&user_id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        log::info!("사용자 정보 수정 완료: {}", updated.id_string());
        Ok(UserResponse::from(updated))
    }

    async fn build_changes(
        &self,
        user_id: &ObjectId,
        request: UpdateUserRequest,
    ) -> AppResult<UserChanges> {
        if let Some(email) = &request.email {
            // 자기 자신의 현재 이메일은 중복으로 보지 않음
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id.as_ref() != Some(user_id) {
                    return Err(email_exists_error());
                }
            }
        }

        let birth_date = match request.birth_date.as_deref() {
            Some(value) => Some(to_bson_date(
                parse_birth_date(value)
                    .map_err(|_| AppError::field("birthDate", BIRTH_DATE_INVALID_MESSAGE))?,
            )),
            None => None,
        };

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(self.password_service.hash(password).await?),
            None => None,
        };

        Ok(UserChanges {
            first_name: request.first_name.map(|v| v.trim().to_string()),
            last_name: request.last_name.map(|v| v.trim().to_string()),
            birth_date,
            city: request.city.map(|v| v.trim().to_string()),
            country: request.country.map(|v| v.trim().to_string()),
            email: request.email,
            password_hash,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::BadRequest(INVALID_CREDENTIALS_MESSAGE.to_string())
}
