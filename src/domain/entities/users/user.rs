//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 기반 로컬 인증을 지원하는 사용자 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일은 시스템 전체에서 유일해야 하며(대소문자 무관),
/// 저장 전에 항상 소문자로 정규화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자 정규화)
    pub email: String,
    /// 해시된 비밀번호 (bcrypt)
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이메일은 이 시점에 이미 소문자로 정규화되어 있어야 합니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
