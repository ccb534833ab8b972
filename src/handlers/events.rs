//! # Event HTTP Handlers
//!
//! 모든 엔드포인트는 인증 미들웨어 뒤에 있으며, 사용자 식별자는
//! [`OptionalUser`]로 받아 서비스 계층의 인증 확인에 그대로 넘깁니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/events` | 이벤트 생성 | 201 Created |
//! | `GET` | `/api/v1/events` | 목록 조회 (`dayOfWeek`, `description`, `onlyMyEvents`, `page`, `limit`) | 200 OK |
//! | `GET` | `/api/v1/events/{id}` | 단건 조회 | 200 OK |
//! | `DELETE` | `/api/v1/events/{id}` | 단건 삭제 | 204 No Content |
//! | `DELETE` | `/api/v1/events?dayOfWeek=` | 요일 단위 일괄 삭제 | 200 OK |

use actix_web::{delete, get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::events::{CreateEventRequest, DeleteEventsQuery, EventListQuery};
use crate::domain::models::auth::OptionalUser;
use crate::services::events::EventService;

#[post("")]
pub async fn create_event(
    service: web::Data<EventService>,
    user: OptionalUser,
    payload: web::Json<CreateEventRequest>,
) -> Result<HttpResponse, AppError> {
    let event = service
        .create_event(payload.into_inner(), user.user_id())
        .await?;

    Ok(HttpResponse::Created().json(event))
}

#[get("")]
pub async fn get_events(
    service: web::Data<EventService>,
    user: OptionalUser,
    query: web::Query<EventListQuery>,
) -> Result<HttpResponse, AppError> {
    let events = service
        .get_events(query.into_inner(), user.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(events))
}

#[get("/{id}")]
pub async fn get_event(
    service: web::Data<EventService>,
    user: OptionalUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let event = service.get_event(&id, user.user_id()).await?;

    Ok(HttpResponse::Ok().json(event))
}

#[delete("/{id}")]
pub async fn delete_event(
    service: web::Data<EventService>,
    user: OptionalUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_event(&id, user.user_id()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("")]
pub async fn delete_events(
    service: web::Data<EventService>,
    user: OptionalUser,
    query: web::Query<DeleteEventsQuery>,
) -> Result<HttpResponse, AppError> {
    let deleted = service
        .delete_events(query.into_inner(), user.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(deleted))
}
