//! 인증 비즈니스 로직 모듈
//!
//! JWT 토큰 발급/검증([`TokenService`])과 로그인/세션 조회([`AuthService`])를
//! 담당합니다.

pub mod auth_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use token_service::TokenService;
