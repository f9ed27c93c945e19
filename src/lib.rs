//! 이벤트 등록 서비스 백엔드
//!
//! Rust 기반의 이벤트 생성/참가 등록 관리 서비스입니다.
//! 정원(capacity)이 있는 이벤트에 대한 경쟁 안전한 등록 처리와
//! JWT 토큰 기반 인증을 제공합니다.
//!
//! # Features
//!
//! - **정원 안전 등록**: 단일 조건부 업데이트로 초과 판매 없는 참가 등록
//! - **이벤트 관리**: 생성, 소유자 전용 수정/삭제, 가용 이벤트 목록
//! - **사용자 관리**: 회원가입, 프로필 수정, 소유/참가 이벤트 목록
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **쿼리 새니타이징**: 외부 입력이 닿는 모든 필터의 연산자 주입 차단
//! - **MongoDB**: 이벤트/사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (스토어 trait에 의존)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 + 쿼리 새니타이징
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use event_service_backend::db::Database;
//! use event_service_backend::repositories::events::EventRepository;
//! use event_service_backend::services::events::EventService;
//!
//! let database = Arc::new(Database::new().await?);
//! let event_repo = Arc::new(EventRepository::new(database.clone()));
//! let event_service = EventService::new(event_repo);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
