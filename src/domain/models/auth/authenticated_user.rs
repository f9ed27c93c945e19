//! 인증된 사용자 모델
//!
//! JWT 검증을 통과한 요청의 호출자 정보를 표현합니다.

use crate::errors::AppError;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

/// JWT 토큰에서 추출된 사용자 정보
///
/// 모든 변경 연산은 이 구조체를 통해 호출자의 사용자 ID를 전달받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId의 16진수 문자열)
    pub user_id: String,

    /// 사용자 이메일 (토큰 클레임에 포함된 경우)
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// 사용자 ID를 ObjectId로 변환합니다.
    ///
    /// 잘못된 형식의 ID는 저장소에 도달하기 전에 거부됩니다.
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 Request Extensions에 저장한 사용자 정보를 추출합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}
