//! 이벤트 스토어 trait
//!
//! 서비스 계층이 의존하는 이벤트 영속성 경계입니다.
//! 프로덕션에서는 [`EventRepository`](super::EventRepository)가,
//! 테스트에서는 인메모리 구현이 이 trait를 구현합니다.

use async_trait::async_trait;
use mongodb::bson::{DateTime, Document, oid::ObjectId};

use crate::{
    domain::entities::events::{Event, EventListing},
    errors::AppResult,
};

/// 사용 가능한 이벤트 목록 조회 조건
///
/// 핸들러의 쿼리 파라미터에서 변환되며, `limit`/`skip`은
/// 이미 클램핑이 끝난 값이라고 가정합니다.
#[derive(Debug, Clone)]
pub struct AvailableQuery {
    /// 이 시각 이후의 이벤트만 포함 (기본: 현재 시각)
    pub from: DateTime,
    /// 페이지 크기 (1..=100)
    pub limit: i64,
    /// 건너뛸 문서 수
    pub skip: i64,
    /// 이름 부분 일치 검색어 (정규식 이스케이프 전 원문)
    pub name_query: Option<String>,
}

/// 이벤트 영속성 연산
#[async_trait]
pub trait EventStore: Send + Sync {
    /// 새 이벤트를 저장하고 할당된 ID를 포함해 반환합니다.
    async fn create(&self, event: Event) -> AppResult<Event>;

    /// ID로 이벤트를 조회합니다.
    async fn find_by_id(&self, event_id: &ObjectId) -> AppResult<Option<Event>>;

    /// (이름, 정확한 ISO 날짜 문자열) 쌍으로 이벤트를 조회합니다.
    ///
    /// 중복 이벤트 검사에 사용되며, 이름은 앞뒤 공백을 제거한 뒤 비교합니다.
    async fn find_by_name_and_date(&self, name: &str, date_iso: &str) -> AppResult<Option<Event>>;

    /// 정원에 여유가 있고 아직 등록되지 않은 경우에만 참가자를 추가합니다.
    ///
    /// 단일 조건부 `findOneAndUpdate`로 수행되는 원자적 연산입니다.
    /// 필터 조건(존재 + 미등록 + 여유 정원)을 모두 만족하는 문서가 없으면
    /// `Ok(None)`을 반환하며, 어떤 조건이 실패했는지는 구분하지 않습니다.
    /// 원인 진단은 서비스 계층의 몫입니다.
    async fn add_attendee_if_available(
        &self,
        event_id: &ObjectId,
        user_id: &ObjectId,
    ) -> AppResult<Option<Event>>;

    /// 현재 등록된 참가자를 제거합니다.
    ///
    /// 참가자 목록에 해당 사용자가 포함된 문서만 매칭하는
    /// 조건부 `findOneAndUpdate`입니다. 매칭 실패 시 `Ok(None)`.
    async fn remove_attendee(
        &self,
        event_id: &ObjectId,
        user_id: &ObjectId,
    ) -> AppResult<Option<Event>>;

    /// 소유자가 일치하는 경우에만 이벤트를 부분 수정합니다.
    ///
    /// `patch`는 `$set`으로 적용되며 수정 후 문서를 반환합니다.
    /// 이벤트가 없거나 소유자가 다르면 `Ok(None)`.
    async fn update_owned(
        &self,
        event_id: &ObjectId,
        owner_id: &ObjectId,
        patch: Document,
    ) -> AppResult<Option<Event>>;

    /// 소유자가 일치하는 경우에만 이벤트를 삭제합니다.
    ///
    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    async fn delete_owned(&self, event_id: &ObjectId, owner_id: &ObjectId) -> AppResult<bool>;

    /// 남은 자리가 있는 다가오는 이벤트 목록을 조회합니다.
    ///
    /// `availability >= 1`인 이벤트만 날짜 오름차순으로 반환합니다.
    async fn find_available(&self, query: &AvailableQuery) -> AppResult<Vec<EventListing>>;

    /// 해당 사용자가 소유한 이벤트 목록을 날짜 오름차순으로 조회합니다.
    async fn find_owned(&self, owner_id: &ObjectId) -> AppResult<Vec<EventListing>>;

    /// 해당 사용자가 참가자로 등록된 이벤트 목록을 조회합니다.
    async fn find_by_attendee(&self, user_id: &ObjectId) -> AppResult<Vec<Event>>;
}
