//! 도메인 모델 모듈
//!
//! 영속화되지 않는 도메인 모델(인증 컨텍스트, 토큰 클레임)을 제공합니다.

pub mod auth;
pub mod token;
