//! 사용자 요청 DTO
//!
//! 회원가입과 프로필 수정 요청의 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// 사용자 이름 (1-100자)
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (8-128자)
    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자 사이여야 합니다"))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
///
/// 모든 필드가 선택 사항이지만, 최소 한 개의 필드는 있어야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_at_least_one_field"))]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자 사이여야 합니다"))]
    pub password: Option<String>,
}

/// 최소 한 개의 수정 필드가 있는지 검증
fn validate_at_least_one_field(req: &UpdateProfileRequest) -> Result<(), ValidationError> {
    if req.name.is_none() && req.email.is_none() && req.password.is_none() {
        return Err(ValidationError::new("empty_patch")
            .with_message("수정할 필드를 최소 한 개 이상 지정해야 합니다".into()));
    }
    Ok(())
}
