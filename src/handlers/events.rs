//! # Event Management HTTP Handlers
//!
//! 이벤트 생성/수정/삭제/등록 관련 HTTP 엔드포인트를 처리하는 핸들러입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/events` | 새 이벤트 생성 | 201 Created |
//! | `PUT` | `/events/{id}` | 이벤트 수정 (소유자) | 200 OK |
//! | `DELETE` | `/events/{id}` | 이벤트 삭제 (소유자) | 200 OK |
//! | `GET` | `/events/available` | 남은 자리가 있는 이벤트 목록 | 200 OK |
//! | `POST` | `/events/{id}/register` | 참가 등록 | 200 OK |
//! | `DELETE` | `/events/{id}/register` | 참가 등록 취소 | 200 OK |
//!
//! 모든 이벤트 라우트는 인증이 필요합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::events::{AvailableEventsQuery, CreateEventRequest, UpdateEventRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::events::EventService;

/// 새 이벤트 생성 핸들러
///
/// # Endpoint
/// `POST /api/v1/events`
#[post("")]
pub async fn create_event(
    user: AuthenticatedUser,
    payload: web::Json<CreateEventRequest>,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let owner_id = user.object_id()?;
    let response = event_service
        .create_event(owner_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 이벤트 수정 핸들러 (소유자 전용)
///
/// # Endpoint
/// `PUT /api/v1/events/{id}`
#[put("/{id}")]
pub async fn update_event(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateEventRequest>,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let owner_id = user.object_id()?;
    let response = event_service
        .update_event(&path, owner_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이벤트 삭제 핸들러 (소유자 전용)
///
/// # Endpoint
/// `DELETE /api/v1/events/{id}`
#[delete("/{id}")]
pub async fn delete_event(
    user: AuthenticatedUser,
    path: web::Path<String>,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    let owner_id = user.object_id()?;
    event_service.delete_event(&path, owner_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "deleted": true,
        "id": path.into_inner(),
    })))
}

/// 남은 자리가 있는 다가오는 이벤트 목록 핸들러
///
/// # Endpoint
/// `GET /api/v1/events/available?from=...&limit=...&page=...&q=...`
#[get("/available")]
pub async fn available_events(
    _user: AuthenticatedUser,
    query: web::Query<AvailableEventsQuery>,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    let listings = event_service.list_available_events(&query).await?;

    Ok(HttpResponse::Ok().json(listings))
}

/// 이벤트 참가 등록 핸들러
///
/// # Endpoint
/// `POST /api/v1/events/{id}/register`
#[post("/{id}/register")]
pub async fn register_to_event(
    user: AuthenticatedUser,
    path: web::Path<String>,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    let user_id = user.object_id()?;
    let response = event_service.register_user(&path, user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이벤트 참가 등록 취소 핸들러
///
/// # Endpoint
/// `DELETE /api/v1/events/{id}/register`
#[delete("/{id}/register")]
pub async fn unregister_from_event(
    user: AuthenticatedUser,
    path: web::Path<String>,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    let user_id = user.object_id()?;
    let response = event_service.unregister_user(&path, user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
