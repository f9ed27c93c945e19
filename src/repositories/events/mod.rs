//! 이벤트 데이터 액세스 계층
//!
//! [`EventStore`] trait가 서비스 계층과의 경계를 이루고,
//! [`EventRepository`]가 MongoDB 기반 구현을 제공합니다.

pub mod event_repo;
pub mod event_store;

pub use event_repo::EventRepository;
pub use event_store::EventStore;
