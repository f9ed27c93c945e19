//! # 이벤트 관리 서비스 구현
//!
//! 이벤트 생명주기와 정원 제어 비즈니스 로직을 담당합니다.
//!
//! ## 정원 제어 설계
//!
//! 등록과 등록 취소는 스토어의 단일 조건부 업데이트에 위임됩니다.
//! 서비스는 업데이트 결과가 `None`일 때만 실패 원인을 사후 진단하며,
//! 진단은 고정된 우선순위를 따릅니다:
//!
//! 1. 이벤트 없음 → `NotFound` (404)
//! 2. 이미 등록됨 / 미등록 → `ConflictError` (409)
//! 3. 정원 초과 → `ConflictError` (409)
//! 4. 원인 불명 (진단 시점과 업데이트 시점 사이의 경합) → `ValidationError` (400)
//!
//! 진단 조회는 업데이트와 별개의 읽기이므로, 마지막 분기는 이론상
//! 도달 가능합니다. 진단이 "이유를 찾지 못한" 경우의 명시적 폴백입니다.

use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, Utc};
use log::{debug, info, warn};
use mongodb::bson::{Bson, DateTime, Document, oid::ObjectId};

use crate::{
    domain::{
        dto::events::{
            request::{AvailableEventsQuery, CreateEventRequest, UpdateEventRequest},
            response::{
                EventAvailabilityResponse, EventResponse, EventSummaryResponse,
                RegisteredEventResponse, UpdatedEventResponse,
            },
        },
        entities::events::Event,
    },
    errors::{AppError, AppResult},
    repositories::events::{EventStore, event_store::AvailableQuery},
};

/// 이벤트 비즈니스 로직 서비스
///
/// 스토어 trait에만 의존하므로 테스트에서 인메모리 구현으로 대체됩니다.
pub struct EventService {
    event_store: Arc<dyn EventStore>,
}

impl EventService {
    /// 새 이벤트 서비스를 생성합니다.
    pub fn new(event_store: Arc<dyn EventStore>) -> Self {
        Self { event_store }
    }

    /// 이벤트 ID 문자열을 ObjectId로 파싱합니다.
    fn parse_event_id(event_id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(event_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 이벤트 ID 형식입니다".to_string()))
    }

    /// 이벤트 날짜가 미래인지 검증합니다.
    fn ensure_future_date(date: &ChronoDateTime<Utc>) -> AppResult<()> {
        if *date < Utc::now() {
            warn!("[EventService] 과거 날짜 거부: {}", date);
            return Err(AppError::ValidationError(
                "이벤트 날짜는 미래여야 합니다".to_string(),
            ));
        }
        Ok(())
    }

    /// 새 이벤트 생성
    ///
    /// 비즈니스 규칙:
    /// - 날짜는 미래여야 합니다.
    /// - (이름, 정확한 ISO 날짜) 쌍이 같은 이벤트는 중복으로 거부됩니다.
    ///   같은 이름이라도 밀리초 단위로 다른 시각이면 허용됩니다.
    pub async fn create_event(
        &self,
        owner_id: ObjectId,
        request: CreateEventRequest,
    ) -> AppResult<EventResponse> {
        debug!(
            "[EventService] create_event - owner_id={} name=\"{}\"",
            owner_id, request.name
        );

        Self::ensure_future_date(&request.date)?;

        let name = request.name.trim().to_string();
        let date_iso = Event::to_iso_string(request.date);

        // (이름, 날짜) 중복 검사. 유니크 인덱스가 최종 방어선이지만
        // 여기서 먼저 걸러 의미 있는 메시지를 제공한다.
        if self
            .event_store
            .find_by_name_and_date(&name, &date_iso)
            .await?
            .is_some()
        {
            warn!(
                "[EventService] create_event - 중복 이벤트: name=\"{}\" date_iso={}",
                name, date_iso
            );
            return Err(AppError::ConflictError(
                "동일한 이름과 날짜의 이벤트가 이미 존재합니다".to_string(),
            ));
        }

        let event = Event::new(
            name,
            request.date,
            request.location.trim().to_string(),
            request.capacity,
            owner_id,
        );

        let created = self.event_store.create(event).await?;
        info!(
            "[EventService] create_event - 이벤트 생성 완료: id={}",
            created.id_string().unwrap_or_default()
        );

        Ok(EventResponse::from(created))
    }

    /// 이벤트 참가 등록
    ///
    /// 정원 검사와 등록을 하나의 조건부 업데이트로 수행합니다.
    /// 정원 불변식은 이 단일 연산으로만 보장됩니다.
    pub async fn register_user(
        &self,
        event_id: &str,
        user_id: ObjectId,
    ) -> AppResult<EventSummaryResponse> {
        let event_oid = Self::parse_event_id(event_id)?;

        if let Some(updated) = self
            .event_store
            .add_attendee_if_available(&event_oid, &user_id)
            .await?
        {
            info!(
                "[EventService] register_user - 등록 완료: event_id={} user_id={}",
                event_id, user_id
            );
            return Ok(EventSummaryResponse::from(updated));
        }

        // 조건부 업데이트 실패. 원인을 사후 진단한다 (우선순위 고정).
        let event = self
            .event_store
            .find_by_id(&event_oid)
            .await?
            .ok_or_else(|| {
                warn!("[EventService] register_user - 이벤트 없음: event_id={}", event_id);
                AppError::NotFound("이벤트를 찾을 수 없습니다".to_string())
            })?;

        if event.has_attendee(&user_id) {
            warn!(
                "[EventService] register_user - 이미 등록됨: event_id={} user_id={}",
                event_id, user_id
            );
            return Err(AppError::ConflictError(
                "이미 이 이벤트에 등록되어 있습니다".to_string(),
            ));
        }

        if event.is_full() {
            warn!("[EventService] register_user - 정원 초과: event_id={}", event_id);
            return Err(AppError::ConflictError(
                "이벤트 정원이 가득 찼습니다".to_string(),
            ));
        }

        // 진단 조회 시점에는 모든 조건이 만족으로 보이는 경우.
        // 업데이트와 진단 사이의 상태 변화가 원인이다.
        warn!(
            "[EventService] register_user - 원인 불명 실패: event_id={} user_id={}",
            event_id, user_id
        );
        Err(AppError::ValidationError(
            "이벤트 등록을 처리할 수 없습니다".to_string(),
        ))
    }

    /// 이벤트 참가 등록 취소
    ///
    /// 등록과 대칭 구조입니다. 제거 조건은 "현재 등록되어 있음" 하나이므로
    /// 진단 분기도 그만큼 단순합니다.
    pub async fn unregister_user(
        &self,
        event_id: &str,
        user_id: ObjectId,
    ) -> AppResult<EventSummaryResponse> {
        let event_oid = Self::parse_event_id(event_id)?;

        if let Some(updated) = self
            .event_store
            .remove_attendee(&event_oid, &user_id)
            .await?
        {
            info!(
                "[EventService] unregister_user - 등록 취소 완료: event_id={} user_id={}",
                event_id, user_id
            );
            return Ok(EventSummaryResponse::from(updated));
        }

        let event = self
            .event_store
            .find_by_id(&event_oid)
            .await?
            .ok_or_else(|| {
                warn!(
                    "[EventService] unregister_user - 이벤트 없음: event_id={}",
                    event_id
                );
                AppError::NotFound("이벤트를 찾을 수 없습니다".to_string())
            })?;

        if !event.has_attendee(&user_id) {
            warn!(
                "[EventService] unregister_user - 미등록 상태: event_id={} user_id={}",
                event_id, user_id
            );
            return Err(AppError::ConflictError(
                "이 이벤트에 등록되어 있지 않습니다".to_string(),
            ));
        }

        warn!(
            "[EventService] unregister_user - 원인 불명 실패: event_id={} user_id={}",
            event_id, user_id
        );
        Err(AppError::ValidationError(
            "이벤트 등록 취소를 처리할 수 없습니다".to_string(),
        ))
    }

    /// 이벤트 수정 (소유자 전용)
    ///
    /// 정원 축소 시 현재 참가자 수 미만으로는 줄일 수 없습니다.
    /// 이 검사는 별도 조회로 수행되므로 등록 경로의 단일 연산과 달리
    /// 원자적이지 않습니다. 검사와 적용 사이에 등록이 끼어들면
    /// `attendees.len() > capacity`인 문서가 생길 수 있으며, 이 경우에도
    /// `availability` 계산은 0 하한으로 고정되어 음수가 노출되지 않습니다.
    pub async fn update_event(
        &self,
        event_id: &str,
        owner_id: ObjectId,
        request: UpdateEventRequest,
    ) -> AppResult<UpdatedEventResponse> {
        let event_oid = Self::parse_event_id(event_id)?;

        let mut patch = Document::new();

        if let Some(ref name) = request.name {
            patch.insert("name", name.trim());
        }
        if let Some(ref location) = request.location {
            patch.insert("location", location.trim());
        }
        if let Some(date) = request.date {
            Self::ensure_future_date(&date)?;
            patch.insert("date", Bson::DateTime(DateTime::from_chrono(date)));
            patch.insert("date_iso", Event::to_iso_string(date));
        }
        if let Some(capacity) = request.capacity {
            // 정원 축소 하한 검사 (비원자적)
            let current = self
                .event_store
                .find_by_id(&event_oid)
                .await?
                .ok_or_else(|| AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()))?;

            let used = current.attendees_count();
            if capacity < used {
                warn!(
                    "[EventService] update_event - 정원({}) < 참가자 수({}): event_id={}",
                    capacity, used, event_id
                );
                return Err(AppError::ConflictError(format!(
                    "정원은 현재 참가자 수({})보다 작을 수 없습니다",
                    used
                )));
            }

            patch.insert("capacity", capacity);
        }

        let updated = self
            .event_store
            .update_owned(&event_oid, &owner_id, patch)
            .await?
            .ok_or_else(|| {
                // 존재하지 않는 경우와 소유자가 아닌 경우를 구분하지 않는다.
                // 권한 없는 호출자에게 리소스 존재 여부를 노출하지 않기 위함이다.
                warn!(
                    "[EventService] update_event - 없거나 권한 없음: event_id={} owner_id={}",
                    event_id, owner_id
                );
                AppError::NotFound("이벤트를 찾을 수 없습니다".to_string())
            })?;

        info!("[EventService] update_event - 수정 완료: event_id={}", event_id);
        Ok(UpdatedEventResponse::from(updated))
    }

    /// 이벤트 삭제 (소유자 전용)
    pub async fn delete_event(&self, event_id: &str, owner_id: ObjectId) -> AppResult<()> {
        let event_oid = Self::parse_event_id(event_id)?;

        let deleted = self.event_store.delete_owned(&event_oid, &owner_id).await?;
        if !deleted {
            warn!(
                "[EventService] delete_event - 없거나 권한 없음: event_id={} owner_id={}",
                event_id, owner_id
            );
            return Err(AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()));
        }

        info!("[EventService] delete_event - 삭제 완료: event_id={}", event_id);
        Ok(())
    }

    /// 남은 자리가 있는 다가오는 이벤트 목록 조회
    pub async fn list_available_events(
        &self,
        query: &AvailableEventsQuery,
    ) -> AppResult<Vec<EventAvailabilityResponse>> {
        let store_query = AvailableQuery {
            from: DateTime::from_chrono(query.from.unwrap_or_else(Utc::now)),
            limit: query.clamped_limit(),
            skip: query.skip() as i64,
            name_query: crate::utils::string_utils::clean_optional_string(query.q.clone()),
        };

        let listings = self.event_store.find_available(&store_query).await?;
        debug!(
            "[EventService] list_available_events - 조회 결과: {}건",
            listings.len()
        );

        Ok(listings
            .into_iter()
            .map(EventAvailabilityResponse::from)
            .collect())
    }

    /// 호출자가 소유한 이벤트 목록 조회
    pub async fn list_owned_events(
        &self,
        owner_id: ObjectId,
    ) -> AppResult<Vec<EventAvailabilityResponse>> {
        let listings = self.event_store.find_owned(&owner_id).await?;

        Ok(listings
            .into_iter()
            .map(EventAvailabilityResponse::from)
            .collect())
    }

    /// 호출자가 참가 등록한 이벤트 목록 조회
    pub async fn list_registered_events(
        &self,
        user_id: ObjectId,
    ) -> AppResult<Vec<RegisteredEventResponse>> {
        let events = self.event_store.find_by_attendee(&user_id).await?;

        Ok(events
            .into_iter()
            .map(RegisteredEventResponse::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::Mutex;

    use crate::domain::entities::events::EventListing;

    /// 조건부 업데이트 의미론을 그대로 재현하는 인메모리 스토어
    ///
    /// 검사와 수정이 하나의 락 구간 안에서 일어나므로
    /// 실제 스토어의 단일 문서 원자성과 동일하게 동작합니다.
    struct InMemoryEventStore {
        events: Mutex<Vec<Event>>,
    }

    impl InMemoryEventStore {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn with_events(events: Vec<Event>) -> Self {
            Self {
                events: Mutex::new(events),
            }
        }
    }

    #[async_trait]
    impl EventStore for InMemoryEventStore {
        async fn create(&self, mut event: Event) -> AppResult<Event> {
            event.id = Some(ObjectId::new());
            self.events.lock().unwrap().push(event.clone());
            Ok(event)
        }

        async fn find_by_id(&self, event_id: &ObjectId) -> AppResult<Option<Event>> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id.as_ref() == Some(event_id))
                .cloned())
        }

        async fn find_by_name_and_date(
            &self,
            name: &str,
            date_iso: &str,
        ) -> AppResult<Option<Event>> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.name == name && e.date_iso == date_iso)
                .cloned())
        }

        async fn add_attendee_if_available(
            &self,
            event_id: &ObjectId,
            user_id: &ObjectId,
        ) -> AppResult<Option<Event>> {
            let mut events = self.events.lock().unwrap();
            let Some(event) = events
                .iter_mut()
                .find(|e| e.id.as_ref() == Some(event_id))
            else {
                return Ok(None);
            };

            if event.has_attendee(user_id) || event.is_full() {
                return Ok(None);
            }

            event.attendees.push(*user_id);
            Ok(Some(event.clone()))
        }

        async fn remove_attendee(
            &self,
            event_id: &ObjectId,
            user_id: &ObjectId,
        ) -> AppResult<Option<Event>> {
            let mut events = self.events.lock().unwrap();
            let Some(event) = events
                .iter_mut()
                .find(|e| e.id.as_ref() == Some(event_id))
            else {
                return Ok(None);
            };

            if !event.has_attendee(user_id) {
                return Ok(None);
            }

            event.attendees.retain(|a| a != user_id);
            Ok(Some(event.clone()))
        }

        async fn update_owned(
            &self,
            event_id: &ObjectId,
            owner_id: &ObjectId,
            patch: Document,
        ) -> AppResult<Option<Event>> {
            let mut events = self.events.lock().unwrap();
            let Some(event) = events
                .iter_mut()
                .find(|e| e.id.as_ref() == Some(event_id) && &e.owner_id == owner_id)
            else {
                return Ok(None);
            };

            if let Ok(name) = patch.get_str("name") {
                event.name = name.to_string();
            }
            if let Ok(location) = patch.get_str("location") {
                event.location = location.to_string();
            }
            if let Ok(capacity) = patch.get_i64("capacity") {
                event.capacity = capacity;
            }
            if let Some(Bson::DateTime(date)) = patch.get("date") {
                event.date = *date;
            }
            if let Ok(date_iso) = patch.get_str("date_iso") {
                event.date_iso = date_iso.to_string();
            }

            Ok(Some(event.clone()))
        }

        async fn delete_owned(&self, event_id: &ObjectId, owner_id: &ObjectId) -> AppResult<bool> {
            let mut events = self.events.lock().unwrap();
            let before = events.len();
            events.retain(|e| !(e.id.as_ref() == Some(event_id) && &e.owner_id == owner_id));
            Ok(events.len() < before)
        }

        async fn find_available(&self, query: &AvailableQuery) -> AppResult<Vec<EventListing>> {
            let events = self.events.lock().unwrap();
            let mut listings: Vec<EventListing> = events
                .iter()
                .filter(|e| e.date >= query.from && e.availability() >= 1)
                .map(|e| EventListing {
                    id: e.id.unwrap(),
                    name: e.name.clone(),
                    date: e.date,
                    location: e.location.clone(),
                    capacity: e.capacity,
                    owner_id: Some(e.owner_id),
                    attendees_count: e.attendees_count(),
                    availability: e.availability(),
                })
                .collect();

            listings.sort_by_key(|l| l.date);
            Ok(listings
                .into_iter()
                .skip(query.skip as usize)
                .take(query.limit as usize)
                .collect())
        }

        async fn find_owned(&self, owner_id: &ObjectId) -> AppResult<Vec<EventListing>> {
            let events = self.events.lock().unwrap();
            Ok(events
                .iter()
                .filter(|e| &e.owner_id == owner_id)
                .map(|e| EventListing {
                    id: e.id.unwrap(),
                    name: e.name.clone(),
                    date: e.date,
                    location: e.location.clone(),
                    capacity: e.capacity,
                    owner_id: None,
                    attendees_count: e.attendees_count(),
                    availability: e.availability(),
                })
                .collect())
        }

        async fn find_by_attendee(&self, user_id: &ObjectId) -> AppResult<Vec<Event>> {
            let events = self.events.lock().unwrap();
            Ok(events
                .iter()
                .filter(|e| e.has_attendee(user_id))
                .cloned()
                .collect())
        }
    }

    fn seeded_event(name: &str, capacity: i64, attendees: Vec<ObjectId>) -> Event {
        let mut event = Event::new(
            name.to_string(),
            Utc::now() + Duration::days(7),
            "Madrid".to_string(),
            capacity,
            ObjectId::new(),
        );
        event.id = Some(ObjectId::new());
        event.attendees = attendees;
        event
    }

    fn service_with(events: Vec<Event>) -> EventService {
        EventService::new(Arc::new(InMemoryEventStore::with_events(events)))
    }

    #[actix_web::test]
    async fn test_register_success_returns_updated_summary() {
        let event = seeded_event("NodeConf", 2, vec![]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let summary = service
            .register_user(&event_id, ObjectId::new())
            .await
            .unwrap();

        assert_eq!(summary.attendees_count, 1);
        assert_eq!(summary.capacity, 2);
        assert_eq!(summary.name, "NodeConf");
    }

    #[actix_web::test]
    async fn test_register_missing_event_is_not_found() {
        let service = service_with(vec![]);

        let result = service
            .register_user(&ObjectId::new().to_hex(), ObjectId::new())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_register_twice_is_conflict() {
        let user_id = ObjectId::new();
        let event = seeded_event("NodeConf", 10, vec![user_id]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let result = service.register_user(&event_id, user_id).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert!(msg.contains("이미")),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_register_full_event_is_conflict() {
        let event = seeded_event("NodeConf", 1, vec![ObjectId::new()]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let result = service.register_user(&event_id, ObjectId::new()).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert!(msg.contains("정원")),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_already_registered_takes_precedence_over_full() {
        // 정원이 가득 찬 이벤트에 이미 등록된 사용자:
        // "이미 등록됨"이 "정원 초과"보다 먼저 보고되어야 한다
        let user_id = ObjectId::new();
        let event = seeded_event("NodeConf", 1, vec![user_id]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let result = service.register_user(&event_id, user_id).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert!(msg.contains("이미")),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_register_invalid_id_is_validation_error() {
        let service = service_with(vec![]);

        let result = service.register_user("not-an-id", ObjectId::new()).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_concurrent_registration_only_one_wins() {
        // 남은 자리 1개에 두 사용자가 동시 등록: 정확히 한 명만 성공해야 한다
        let event = seeded_event("NodeConf", 1, vec![]);
        let event_id = event.id.unwrap().to_hex();
        let store = Arc::new(InMemoryEventStore::with_events(vec![event]));
        let service = Arc::new(EventService::new(store));

        let first = service.register_user(&event_id, ObjectId::new());
        let second = service.register_user(&event_id, ObjectId::new());
        let (r1, r2) = futures_util::join!(first, second);

        let successes = [&r1, &r2].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let loser = if r1.is_ok() { r2 } else { r1 };
        assert!(matches!(loser, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_unregister_roundtrip_frees_slot() {
        let user_id = ObjectId::new();
        let event = seeded_event("NodeConf", 1, vec![]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        service.register_user(&event_id, user_id).await.unwrap();
        let summary = service.unregister_user(&event_id, user_id).await.unwrap();
        assert_eq!(summary.attendees_count, 0);

        // 자리가 다시 비었으므로 다른 사용자가 등록 가능
        let summary = service
            .register_user(&event_id, ObjectId::new())
            .await
            .unwrap();
        assert_eq!(summary.attendees_count, 1);
    }

    #[actix_web::test]
    async fn test_unregister_when_not_registered_is_conflict() {
        let event = seeded_event("NodeConf", 5, vec![ObjectId::new()]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let result = service.unregister_user(&event_id, ObjectId::new()).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_unregister_missing_event_is_not_found() {
        let service = service_with(vec![]);

        let result = service
            .unregister_user(&ObjectId::new().to_hex(), ObjectId::new())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_create_event_rejects_past_date() {
        let service = service_with(vec![]);

        let request = CreateEventRequest {
            name: "RetroConf".to_string(),
            date: Utc::now() - Duration::days(1),
            location: "Seoul".to_string(),
            capacity: 10,
        };

        let result = service.create_event(ObjectId::new(), request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_create_event_rejects_exact_duplicate() {
        let service = service_with(vec![]);
        let date = Utc::now() + Duration::days(30);

        let request = CreateEventRequest {
            name: "NodeConf".to_string(),
            date,
            location: "Madrid".to_string(),
            capacity: 10,
        };

        service
            .create_event(ObjectId::new(), request.clone())
            .await
            .unwrap();

        let result = service.create_event(ObjectId::new(), request).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_create_event_same_name_different_time_is_allowed() {
        let service = service_with(vec![]);
        let date = Utc::now() + Duration::days(30);

        let first = CreateEventRequest {
            name: "NodeConf".to_string(),
            date,
            location: "Madrid".to_string(),
            capacity: 10,
        };
        let second = CreateEventRequest {
            date: date + Duration::milliseconds(1),
            ..first.clone()
        };

        service.create_event(ObjectId::new(), first).await.unwrap();
        let result = service.create_event(ObjectId::new(), second).await;

        assert!(result.is_ok());
    }

    #[actix_web::test]
    async fn test_update_capacity_below_attendees_is_conflict() {
        let owner_id = ObjectId::new();
        let mut event = seeded_event("NodeConf", 10, vec![ObjectId::new(), ObjectId::new()]);
        event.owner_id = owner_id;
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let request = UpdateEventRequest {
            name: None,
            date: None,
            location: None,
            capacity: Some(1),
        };

        let result = service.update_event(&event_id, owner_id, request).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert!(msg.contains("2")),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn test_update_by_non_owner_is_not_found() {
        let event = seeded_event("NodeConf", 10, vec![]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let request = UpdateEventRequest {
            name: Some("Renamed".to_string()),
            date: None,
            location: None,
            capacity: None,
        };

        // 소유자가 아닌 호출자에게는 존재 여부를 노출하지 않는다
        let result = service
            .update_event(&event_id, ObjectId::new(), request)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_date_refreshes_iso_pair() {
        let owner_id = ObjectId::new();
        let mut event = seeded_event("NodeConf", 10, vec![]);
        event.owner_id = owner_id;
        let event_id = event.id.unwrap().to_hex();
        let store = Arc::new(InMemoryEventStore::with_events(vec![event.clone()]));
        let service = EventService::new(store.clone());

        let new_date = Utc::now() + Duration::days(60);
        let request = UpdateEventRequest {
            name: None,
            date: Some(new_date),
            location: None,
            capacity: None,
        };

        service
            .update_event(&event_id, owner_id, request)
            .await
            .unwrap();

        let stored = store
            .find_by_id(event.id.as_ref().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.date_iso, Event::to_iso_string(new_date));
    }

    #[actix_web::test]
    async fn test_delete_by_non_owner_is_not_found() {
        let event = seeded_event("NodeConf", 10, vec![]);
        let event_id = event.id.unwrap().to_hex();
        let service = service_with(vec![event]);

        let result = service.delete_event(&event_id, ObjectId::new()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_available_excludes_full_events() {
        let open = seeded_event("OpenConf", 2, vec![ObjectId::new()]);
        let full = seeded_event("FullConf", 1, vec![ObjectId::new()]);
        let service = service_with(vec![open, full]);

        let query = AvailableEventsQuery {
            from: None,
            limit: None,
            page: None,
            q: None,
        };

        let listings = service.list_available_events(&query).await.unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name, "OpenConf");
        assert_eq!(listings[0].availability, 1);
    }

    #[actix_web::test]
    async fn test_list_registered_marks_attendee_role() {
        let user_id = ObjectId::new();
        let event = seeded_event("NodeConf", 10, vec![user_id]);
        let service = service_with(vec![event]);

        let registered = service.list_registered_events(user_id).await.unwrap();

        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].role, "attendee");
    }

    /// 조건부 업데이트는 항상 실패하지만 진단 조회는 멀쩡한 이벤트를
    /// 반환하는 스토어. 업데이트와 진단 사이의 경합을 재현한다.
    struct AlwaysRacingStore {
        event: Event,
    }

    #[async_trait]
    impl EventStore for AlwaysRacingStore {
        async fn create(&self, event: Event) -> AppResult<Event> {
            Ok(event)
        }

        async fn find_by_id(&self, _event_id: &ObjectId) -> AppResult<Option<Event>> {
            Ok(Some(self.event.clone()))
        }

        async fn find_by_name_and_date(&self, _: &str, _: &str) -> AppResult<Option<Event>> {
            Ok(None)
        }

        async fn add_attendee_if_available(
            &self,
            _: &ObjectId,
            _: &ObjectId,
        ) -> AppResult<Option<Event>> {
            Ok(None)
        }

        async fn remove_attendee(&self, _: &ObjectId, _: &ObjectId) -> AppResult<Option<Event>> {
            Ok(None)
        }

        async fn update_owned(
            &self,
            _: &ObjectId,
            _: &ObjectId,
            _: Document,
        ) -> AppResult<Option<Event>> {
            Ok(None)
        }

        async fn delete_owned(&self, _: &ObjectId, _: &ObjectId) -> AppResult<bool> {
            Ok(false)
        }

        async fn find_available(&self, _: &AvailableQuery) -> AppResult<Vec<EventListing>> {
            Ok(vec![])
        }

        async fn find_owned(&self, _: &ObjectId) -> AppResult<Vec<EventListing>> {
            Ok(vec![])
        }

        async fn find_by_attendee(&self, _: &ObjectId) -> AppResult<Vec<Event>> {
            Ok(vec![])
        }
    }

    #[actix_web::test]
    async fn test_undiagnosable_failure_falls_back_to_validation_error() {
        // 진단 시점에는 자리도 있고 미등록 상태로 보이는 경우:
        // 명시적 폴백 분기가 400으로 보고해야 한다
        let event = seeded_event("NodeConf", 10, vec![]);
        let event_id = event.id.unwrap().to_hex();
        let service = EventService::new(Arc::new(AlwaysRacingStore { event }));

        let result = service.register_user(&event_id, ObjectId::new()).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
