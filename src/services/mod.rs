//! 비즈니스 로직을 담당하는 서비스 모듈
//!
//! 서비스는 스토어 trait에만 의존하며, 생성자를 통해 `Arc<dyn Store>`를
//! 주입받습니다. HTTP 계층(핸들러)과 영속성 계층(리포지토리) 사이에서
//! 도메인 규칙을 강제하는 유일한 장소입니다.

pub mod auth;
pub mod events;
pub mod users;
