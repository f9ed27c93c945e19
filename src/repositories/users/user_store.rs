//! 사용자 스토어 trait

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use crate::{domain::entities::users::User, errors::AppResult};

/// 사용자 영속성 연산
///
/// 서비스 계층이 의존하는 사용자 영속성 경계입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 할당된 ID를 포함해 반환합니다.
    ///
    /// 이메일이 이미 사용 중이면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, user_id: &ObjectId) -> AppResult<Option<User>>;

    /// 사용자 정보를 부분 수정하고 수정 후 문서를 반환합니다.
    ///
    /// `patch`는 `$set`으로 적용됩니다. 사용자가 없으면 `Ok(None)`.
    async fn update_by_id(&self, user_id: &ObjectId, patch: Document) -> AppResult<Option<User>>;
}
