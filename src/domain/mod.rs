//! 도메인 모듈
//!
//! 엔티티, DTO, 인증/토큰 모델 등 도메인 타입들을 제공합니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use models::{auth, token};
