//! 이벤트 응답 DTO
//!
//! 엔티티와 집계 읽기 모델을 API 응답 형태로 변환합니다.
//! 날짜는 모두 RFC3339 문자열로 직렬화됩니다.

use crate::domain::entities::events::{Event, EventListing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 이벤트 생성/조회 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i64,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            date: event.date.to_chrono(),
            name: event.name,
            location: event.location,
            capacity: event.capacity,
        }
    }
}

/// 등록/등록 취소 결과 요약 DTO
///
/// 조건부 업데이트가 반환한 갱신 문서 기준의 참가자 수를 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummaryResponse {
    pub id: String,
    pub name: String,
    pub attendees_count: i64,
    pub capacity: i64,
}

impl From<Event> for EventSummaryResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            attendees_count: event.attendees.len() as i64,
            name: event.name,
            capacity: event.capacity,
        }
    }
}

/// 이벤트 수정 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedEventResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i64,
    pub attendees_count: i64,
}

impl From<Event> for UpdatedEventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            date: event.date.to_chrono(),
            attendees_count: event.attendees.len() as i64,
            name: event.name,
            location: event.location,
            capacity: event.capacity,
        }
    }
}

/// 가용 이벤트 목록 응답 DTO
///
/// `availability`는 저장 필드가 아니라 항상 계산되는 파생 필드입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAvailabilityResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i64,
    pub attendees_count: i64,
    pub availability: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl From<EventListing> for EventAvailabilityResponse {
    fn from(row: EventListing) -> Self {
        Self {
            id: row.id.to_hex(),
            date: row.date.to_chrono(),
            owner_id: row.owner_id.map(|id| id.to_hex()),
            name: row.name,
            location: row.location,
            capacity: row.capacity,
            attendees_count: row.attendees_count,
            availability: row.availability,
        }
    }
}

/// 참가 등록한 이벤트 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredEventResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i64,
    pub attendees_count: i64,
    /// 목록에서의 호출자 역할 표시 (항상 "attendee")
    pub role: String,
    pub owner_id: String,
}

impl From<Event> for RegisteredEventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            date: event.date.to_chrono(),
            attendees_count: event.attendees.len() as i64,
            owner_id: event.owner_id.to_hex(),
            name: event.name,
            location: event.location,
            capacity: event.capacity,
            role: "attendee".to_string(),
        }
    }
}
