//! 로그인/세션 조회 서비스 구현
//!
//! 이메일/비밀번호 인증과 현재 세션 사용자 조회를 담당합니다.
//!
//! ## 보안 설계
//!
//! 로그인 실패 시 "계정 없음"과 "비밀번호 불일치"를 구분하지 않고
//! 동일한 메시지로 응답합니다. 계정 존재 여부를 탐색하는 공격을
//! 차단하기 위함입니다.

use std::sync::Arc;

use bcrypt::verify;
use log::{info, warn};

use crate::{
    domain::{
        dto::{auth::{LoginRequest, LoginResponse}, users::UserResponse},
        models::auth::AuthenticatedUser,
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

use super::TokenService;

/// 인증 비즈니스 로직 서비스
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    token_service: TokenService,
}

impl AuthService {
    /// 새 인증 서비스를 생성합니다.
    pub fn new(user_store: Arc<dyn UserStore>, token_service: TokenService) -> Self {
        Self {
            user_store,
            token_service,
        }
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공 시 JWT 액세스 토큰과 사용자 프로필을 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let email = request.email.trim().to_lowercase();

        let user = self.user_store.find_by_email(&email).await?.ok_or_else(|| {
            warn!("[AuthService] login - 존재하지 않는 계정: {}", email);
            AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string())
        })?;

        let password_matches = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !password_matches {
            warn!("[AuthService] login - 비밀번호 불일치: {}", email);
            return Err(AppError::AuthenticationError(
                "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        let token = self.token_service.generate_token(&user)?;
        info!(
            "[AuthService] login - 로그인 성공: id={}",
            user.id_string().unwrap_or_default()
        );

        Ok(LoginResponse::new(token, user))
    }

    /// 현재 세션의 사용자 프로필 조회
    pub async fn current_user(&self, caller: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user_id = caller.object_id()?;

        let user = self
            .user_store
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bcrypt::hash;
    use mongodb::bson::{Document, oid::ObjectId};
    use std::sync::Mutex;

    use crate::domain::entities::users::User;

    struct InMemoryUserStore {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for InMemoryUserStore {
        async fn create(&self, mut user: User) -> AppResult<User> {
            user.id = Some(ObjectId::new());
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn find_by_id(&self, user_id: &ObjectId) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id.as_ref() == Some(user_id))
                .cloned())
        }

        async fn update_by_id(&self, _: &ObjectId, _: Document) -> AppResult<Option<User>> {
            Ok(None)
        }
    }

    async fn service_with_user(email: &str, password: &str) -> (AuthService, User) {
        let store = Arc::new(InMemoryUserStore {
            users: Mutex::new(Vec::new()),
        });

        let password_hash = hash(password, 4).unwrap();
        let user = store
            .create(User::new("Ana".to_string(), email.to_string(), password_hash))
            .await
            .unwrap();

        (AuthService::new(store, TokenService::new()), user)
    }

    #[actix_web::test]
    async fn test_login_success_returns_verifiable_token() {
        let (service, user) = service_with_user("ana@example.com", "password123").await;

        let response = service
            .login(LoginRequest {
                email: "ana@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.email, "ana@example.com");

        let claims = TokenService::new().verify_token(&response.token).unwrap();
        assert_eq!(claims.sub, user.id_string().unwrap());
    }

    #[actix_web::test]
    async fn test_login_wrong_password_and_unknown_email_same_error() {
        let (service, _) = service_with_user("ana@example.com", "password123").await;

        let wrong_password = service
            .login(LoginRequest {
                email: "ana@example.com".to_string(),
                password: "wrongpassword".to_string(),
            })
            .await;

        let unknown_email = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await;

        // 두 실패 모두 같은 메시지의 401이어야 한다
        let msg1 = match wrong_password {
            Err(AppError::AuthenticationError(m)) => m,
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        };
        let msg2 = match unknown_email {
            Err(AppError::AuthenticationError(m)) => m,
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        };
        assert_eq!(msg1, msg2);
    }

    #[actix_web::test]
    async fn test_login_email_is_case_insensitive() {
        let (service, _) = service_with_user("ana@example.com", "password123").await;

        let response = service
            .login(LoginRequest {
                email: "ANA@Example.com".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(response.is_ok());
    }

    #[actix_web::test]
    async fn test_current_user_missing_is_not_found() {
        let (service, _) = service_with_user("ana@example.com", "password123").await;

        let caller = AuthenticatedUser {
            user_id: ObjectId::new().to_hex(),
            email: None,
        };

        let result = service.current_user(&caller).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
