//! 이벤트 목록 읽기 모델
//!
//! 집계 파이프라인의 `$addFields` / `$project` 출력에 대응하는 구조체입니다.
//! `attendees_count`와 `availability`는 저장되지 않고 항상 계산됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 집계 파이프라인이 산출하는 이벤트 목록 행
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListing {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub date: DateTime,
    pub location: String,
    pub capacity: i64,
    /// 소유자 ID (소유 이벤트 목록 projection에서는 생략됨)
    #[serde(default)]
    pub owner_id: Option<ObjectId>,
    /// 계산 필드: 현재 참가자 수
    pub attendees_count: i64,
    /// 계산 필드: max(capacity - attendees_count, 0)
    pub availability: i64,
}
