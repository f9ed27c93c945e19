//! # Authentication HTTP Handlers
//!
//! 로그인과 현재 세션 조회 엔드포인트를 처리합니다.

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::dto::auth::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 이메일/비밀번호 로그인 핸들러
///
/// 성공 시 JWT 액세스 토큰과 사용자 프로필을 반환합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 세션 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/me`
#[get("/me")]
pub async fn current_user(
    user: AuthenticatedUser,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let response = auth_service.current_user(&user).await?;

    Ok(HttpResponse::Ok().json(response))
}
