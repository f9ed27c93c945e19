//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: 이메일 유니크 인덱스와 E11000 → `ConflictError` 변환
//! - **쿼리 새니타이징**: 외부 입력이 닿는 필터/패치는 저장 전에 정화
//! - **생성자 주입**: [`Database`] 핸들을 명시적으로 주입받음

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};

use crate::{
    db::{
        Database,
        sanitize::{sanitize_filter, sanitize_patch},
    },
    domain::entities::users::User,
    errors::{AppError, AppResult},
    repositories::is_duplicate_key_error,
};

use super::user_store::UserStore;

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션의 CRUD 연산을 담당합니다.
pub struct UserRepository {
    /// 주입된 MongoDB 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 사용자 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>("users")
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출됩니다.
    ///
    /// - `email` UNIQUE: 중복 가입 방지 및 로그인 조회 최적화
    /// - `created_at` 내림차순: 최근 가입자 조회 최적화
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        // 이메일은 외부 입력이므로 새니타이징을 거친다
        let filter = sanitize_filter(&doc! { "email": email });

        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, user_id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_by_id(&self, user_id: &ObjectId, patch: Document) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        // patch는 외부 입력에서 조립되므로 연산자/점 키를 제거한다
        let update = doc! { "$set": sanitize_patch(&patch) };

        self.collection()
            .find_one_and_update(doc! { "_id": user_id }, update)
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }
}
