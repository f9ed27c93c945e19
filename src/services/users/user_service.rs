//! # 사용자 관리 서비스 구현
//!
//! 회원가입과 프로필 수정 비즈니스 로직을 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost 설정 (개발 4, 운영 12)
//! - **이메일 정규화**: 저장/조회 전 항상 소문자로 변환
//! - **민감 정보 제거**: 응답 DTO에서 비밀번호 해시 제외

use std::sync::Arc;

use bcrypt::hash;
use log::{info, warn};
use mongodb::bson::{Document, oid::ObjectId};

use crate::{
    config::PasswordConfig,
    domain::{
        dto::users::{
            request::{RegisterUserRequest, UpdateProfileRequest},
            response::UserResponse,
        },
        entities::users::User,
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    /// 새 사용자 서비스를 생성합니다.
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 새 사용자 계정 생성
    ///
    /// 이메일 중복을 사전 검사하고 비밀번호를 bcrypt로 해싱합니다.
    /// 사전 검사와 저장 사이의 경합은 스토어의 유니크 제약이 막습니다.
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<UserResponse> {
        let email = request.email.trim().to_lowercase();

        if self.user_store.find_by_email(&email).await?.is_some() {
            warn!("[UserService] register - 이메일 중복: {}", email);
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.name.trim().to_string(), email, password_hash);
        let created = self.user_store.create(user).await?;

        info!(
            "[UserService] register - 사용자 생성 완료: id={}",
            created.id_string().unwrap_or_default()
        );

        Ok(UserResponse::from(created))
    }

    /// ID로 사용자 프로필 조회
    pub async fn get_profile(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 프로필 부분 수정
    ///
    /// 이메일 변경 시 소문자 정규화와 중복 검사를 수행하고,
    /// 비밀번호 변경 시 새로 해싱합니다.
    pub async fn update_profile(
        &self,
        user_id: &ObjectId,
        request: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        let mut patch = Document::new();

        if let Some(ref name) = request.name {
            patch.insert("name", name.trim());
        }

        if let Some(ref email) = request.email {
            let email = email.trim().to_lowercase();

            // 다른 사용자가 이미 쓰는 이메일인지 확인
            if let Some(existing) = self.user_store.find_by_email(&email).await? {
                if existing.id.as_ref() != Some(user_id) {
                    warn!("[UserService] update_profile - 이메일 중복: {}", email);
                    return Err(AppError::ConflictError(
                        "이미 사용 중인 이메일입니다".to_string(),
                    ));
                }
            }

            patch.insert("email", email);
        }

        if let Some(ref password) = request.password {
            let password_hash = hash(password, PasswordConfig::bcrypt_cost())
                .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
            patch.insert("password_hash", password_hash);
        }

        let updated = self
            .user_store
            .update_by_id(user_id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        info!(
            "[UserService] update_profile - 프로필 수정 완료: id={}",
            user_id
        );

        Ok(UserResponse::from(updated))
    }
}
