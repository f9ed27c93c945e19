//! 사용자 비즈니스 로직 모듈

pub mod user_service;

pub use user_service::UserService;
