//! 로그인 응답 DTO

use crate::domain::dto::users::UserResponse;
use crate::domain::entities::users::User;
use serde::{Deserialize, Serialize};

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user: UserResponse::from(user),
        }
    }
}
