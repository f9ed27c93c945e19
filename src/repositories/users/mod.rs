//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`] trait가 서비스 계층과의 경계를 이루고,
//! [`UserRepository`]가 MongoDB 기반 구현을 제공합니다.

pub mod user_repo;
pub mod user_store;

pub use user_repo::UserRepository;
pub use user_store::UserStore;
