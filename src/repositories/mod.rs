//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 MongoDB 컬렉션 하나를 감싸며, 생성자를 통해
//! [`Database`](crate::db::Database) 핸들을 주입받습니다.
//! 서비스 계층은 구체 타입이 아니라 스토어 trait
//! ([`EventStore`](events::EventStore), [`UserStore`](users::UserStore))에만
//! 의존하므로 테스트에서 인메모리 구현으로 대체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::Database;
//! use crate::repositories::events::EventRepository;
//!
//! let database = Arc::new(Database::new().await?);
//! let event_repo = Arc::new(EventRepository::new(database.clone()));
//! ```

pub mod events;
pub mod users;

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

/// MongoDB 유니크 인덱스 위반(E11000) 여부 판별
///
/// 유니크 제약 위반은 `ConflictError`로 변환되어야 하므로
/// 일반 `DatabaseError`와 구분이 필요합니다.
pub(crate) fn is_duplicate_key_error(error: &MongoError) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        _ => false,
    }
}
