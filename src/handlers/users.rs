//! # User Management HTTP Handlers
//!
//! 사용자 계정과 사용자 소유/참가 이벤트 목록 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 회원가입 (인증 불필요) | 201 Created |
//! | `PATCH` | `/users` | 프로필 부분 수정 | 200 OK |
//! | `GET` | `/users/events` | 소유한 이벤트 목록 | 200 OK |
//! | `GET` | `/users/events/registered` | 참가 등록한 이벤트 목록 | 200 OK |

use actix_web::{HttpResponse, get, patch, post, web};
use validator::Validate;

use crate::domain::dto::users::{RegisterUserRequest, UpdateProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::{events::EventService, users::UserService};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/users`
#[post("")]
pub async fn register_user(
    payload: web::Json<RegisterUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 프로필 부분 수정 핸들러
///
/// # Endpoint
/// `PATCH /api/v1/users`
#[patch("")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_id = user.object_id()?;
    let response = user_service
        .update_profile(&user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 소유한 이벤트 목록 핸들러
///
/// # Endpoint
/// `GET /api/v1/users/events`
#[get("/events")]
pub async fn owned_events(
    user: AuthenticatedUser,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    let owner_id = user.object_id()?;
    let listings = event_service.list_owned_events(owner_id).await?;

    Ok(HttpResponse::Ok().json(listings))
}

/// 참가 등록한 이벤트 목록 핸들러
///
/// # Endpoint
/// `GET /api/v1/users/events/registered`
#[get("/events/registered")]
pub async fn registered_events(
    user: AuthenticatedUser,
    event_service: web::Data<EventService>,
) -> Result<HttpResponse, AppError> {
    let user_id = user.object_id()?;
    let events = event_service.list_registered_events(user_id).await?;

    Ok(HttpResponse::Ok().json(events))
}
