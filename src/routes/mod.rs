//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 이벤트, 사용자, 인증 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # 인증 정책
//!
//! - `/api/v1/events/**`: 전체 필수 인증 (`AuthMiddleware::required`)
//! - `/api/v1/users`, `/api/v1/auth`: 선택적 인증 스코프.
//!   회원가입/로그인은 토큰 없이 접근 가능하고, 나머지 핸들러는
//!   [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
//!   추출에 실패하면 401로 거부됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_event_routes(cfg);
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

/// 이벤트 관련 라우트를 설정합니다
///
/// 모든 이벤트 라우트는 유효한 JWT 토큰을 요구합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/events` - 이벤트 생성
/// - `GET /api/v1/events/available` - 남은 자리가 있는 이벤트 목록
/// - `POST /api/v1/events/{id}/register` - 참가 등록
/// - `DELETE /api/v1/events/{id}/register` - 참가 등록 취소
/// - `PUT /api/v1/events/{id}` - 이벤트 수정 (소유자)
/// - `DELETE /api/v1/events/{id}` - 이벤트 삭제 (소유자)
fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .wrap(AuthMiddleware::required())
            // 고정 경로를 "/{id}" 패턴보다 먼저 등록한다
            .service(handlers::events::available_events)
            .service(handlers::events::register_to_event)
            .service(handlers::events::unregister_from_event)
            .service(handlers::events::create_event)
            .service(handlers::events::update_event)
            .service(handlers::events::delete_event),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 회원가입은 Public이고, 프로필 수정과 이벤트 목록 조회는 인증이 필요합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/users` - 회원가입 (Public)
/// - `PATCH /api/v1/users` - 프로필 부분 수정
/// - `GET /api/v1/users/events` - 소유한 이벤트 목록
/// - `GET /api/v1/users/events/registered` - 참가 등록한 이벤트 목록
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::optional())
            .service(handlers::users::register_user)
            .service(handlers::users::update_profile)
            .service(handlers::users::registered_events)
            .service(handlers::users::owned_events),
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인 (Public)
/// - `GET /api/v1/auth/me` - 현재 사용자 정보 조회
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::login)
            .service(handlers::auth::current_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "event_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
