//! # User HTTP Handlers
//!
//! 회원가입, 로그인, 사용자 정보 수정 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/api/v1/users/sign-up` | 불필요 | 회원가입 | 201 Created |
//! | `POST` | `/api/v1/users/sign-in` | 불필요 | 로그인 (토큰 발급) | 200 OK |
//! | `PUT` | `/api/v1/users/{id}` | Bearer | 본인 정보 수정 | 200 OK |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/users/sign-in \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"maria@example.com","password":"password123"}'
//! ```

use actix_web::{post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::{CreateUserRequest, LoginUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

#[post("/sign-up")]
pub async fn sign_up(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[post("/sign-in")]
pub async fn sign_in(
    service: web::Data<UserService>,
    payload: web::Json<LoginUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰의 사용자와 경로의 `{id}`가 다르면 403입니다.
///
/// 인증 미들웨어는 이 리소스에만 적용되므로 다른 `/api/v1/users/*` 경로는 404로 남습니다.
#[put("/{id}", wrap = "AuthMiddleware")]
pub async fn update_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service
        .update_user(Some(user.user_id.as_str()), &id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}
