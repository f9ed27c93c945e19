//! 이벤트 비즈니스 로직 모듈

pub mod event_service;

pub use event_service::EventService;
