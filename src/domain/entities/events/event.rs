//! Event Entity Implementation
//!
//! 이벤트 엔티티의 핵심 구현체입니다.

use chrono::{DateTime as ChronoDateTime, SecondsFormat, Utc};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 이벤트 엔티티
///
/// 정원(capacity)이 있는 등록형 이벤트를 표현합니다.
///
/// ## 불변식
///
/// - `attendees.len() <= capacity` - 어떤 관측 시점에서도 참가자 수는
///   정원을 초과하지 않습니다. 이 불변식은 저장소의 단일 조건부 업데이트
///   연산으로만 보장되며, 애플리케이션 레벨 잠금은 사용하지 않습니다.
/// - `attendees`에는 중복된 사용자 ID가 없습니다 (`$addToSet` 삽입).
/// - `date`와 `date_iso`는 같은 시각의 비정규화 쌍입니다.
///   `date_iso`는 (이름, 날짜) 중복 검사의 정확한 키로 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이벤트 이름
    pub name: String,
    /// 이벤트 일시
    pub date: DateTime,
    /// 이벤트 일시의 RFC3339 문자열 표현 (비정규화)
    pub date_iso: String,
    /// 이벤트 장소
    pub location: String,
    /// 정원 (1 이상)
    pub capacity: i64,
    /// 이벤트 소유자 (생성한 사용자)
    pub owner_id: ObjectId,
    /// 참가자 사용자 ID 목록 (삽입 순서는 의미 없음)
    #[serde(default)]
    pub attendees: Vec<ObjectId>,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Event {
    /// 새 이벤트 생성
    pub fn new(
        name: String,
        date: ChronoDateTime<Utc>,
        location: String,
        capacity: i64,
        owner_id: ObjectId,
    ) -> Self {
        Self {
            id: None,
            name,
            date: DateTime::from_chrono(date),
            date_iso: Self::to_iso_string(date),
            location,
            capacity,
            owner_id,
            attendees: Vec::new(),
            created_at: DateTime::now(),
        }
    }

    /// RFC3339 밀리초 정밀도 문자열로 변환합니다.
    ///
    /// (이름, 날짜) 중복 검사에서 정확한 문자열 비교 키로 사용합니다.
    pub fn to_iso_string(date: ChronoDateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 현재 참가자 수
    pub fn attendees_count(&self) -> i64 {
        self.attendees.len() as i64
    }

    /// 남은 자리 수 (음수가 되지 않도록 고정)
    pub fn availability(&self) -> i64 {
        (self.capacity - self.attendees_count()).max(0)
    }

    /// 해당 사용자가 이미 참가자인지 확인
    pub fn has_attendee(&self, user_id: &ObjectId) -> bool {
        self.attendees.contains(user_id)
    }

    /// 정원이 가득 찼는지 확인
    pub fn is_full(&self) -> bool {
        self.attendees_count() >= self.capacity
    }
}
