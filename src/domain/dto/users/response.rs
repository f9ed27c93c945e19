//! 사용자 응답 DTO

use crate::domain::entities::users::User;
use serde::{Deserialize, Serialize};

/// 사용자 응답 DTO
///
/// 비밀번호 해시 등 민감 정보를 제외한 공개 프로필만 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
        }
    }
}
