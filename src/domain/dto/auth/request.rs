//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 이메일/비밀번호 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자 사이여야 합니다"))]
    pub password: String,
}
