//! # 이벤트 리포지토리 구현
//!
//! 이벤트 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **원자적 정원 제어**: 등록/취소는 단일 조건부 `findOneAndUpdate`로 수행
//! - **소유권 내장 필터**: 수정/삭제 필터에 소유자 조건을 포함
//! - **집계 기반 목록**: `attendees_count`/`availability`는 항상 파이프라인에서 계산
//! - **쿼리 새니타이징**: 외부 입력이 닿는 필터는 저장 전에 모두 정화

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    Collection, IndexModel,
    bson::{self, Bson, Document, Regex, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};

use crate::{
    db::{
        Database,
        sanitize::{escape_regex, sanitize_filter, sanitize_match, sanitize_patch},
    },
    domain::entities::events::{Event, EventListing},
    errors::{AppError, AppResult},
    repositories::is_duplicate_key_error,
};

use super::event_store::{AvailableQuery, EventStore};

/// 이벤트 데이터 액세스 리포지토리
///
/// `events` 컬렉션의 CRUD와 집계 파이프라인을 담당합니다.
/// 정원 불변식(`attendees.len() <= capacity`)은 이 리포지토리의
/// [`add_attendee_if_available`](EventStore::add_attendee_if_available)
/// 필터 조건으로만 보장됩니다.
pub struct EventRepository {
    /// 주입된 MongoDB 연결
    db: Arc<Database>,
}

impl EventRepository {
    /// 새 이벤트 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Event> {
        self.db.get_database().collection::<Event>("events")
    }

    fn document_collection(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>("events")
    }

    /// `attendees_count`와 `availability` 계산 필드를 추가하는 파이프라인 단계
    ///
    /// `availability`는 `max(capacity - attendees_count, 0)`으로,
    /// 불변식이 깨진 문서가 있더라도 음수가 노출되지 않습니다.
    fn availability_stage() -> Document {
        let attendees_size = doc! { "$size": { "$ifNull": ["$attendees", []] } };

        doc! {
            "$addFields": {
                "attendees_count": &attendees_size,
                "availability": {
                    "$max": [
                        { "$subtract": ["$capacity", attendees_size] },
                        0
                    ]
                }
            }
        }
    }

    /// 수정 후 문서를 반환하는 findOneAndUpdate 옵션
    fn after_update_options() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    async fn run_listing_pipeline(&self, pipeline: Vec<Document>) -> AppResult<Vec<EventListing>> {
        let mut cursor = self
            .document_collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut listings = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            let listing: EventListing = bson::from_document(document)
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            listings.push(listing);
        }

        Ok(listings)
    }

    /// 이벤트 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출됩니다.
    ///
    /// - `date`: 다가오는 이벤트 조회/정렬 최적화
    /// - `owner_id`: 소유 이벤트 목록 조회 최적화
    /// - `(name, date_iso)` UNIQUE: 중복 이벤트에 대한 최종 방어선.
    ///   서비스 계층의 사전 조회와 경합하는 동시 생성까지 차단합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": 1 })
            .options(IndexOptions::builder().name("date_asc".to_string()).build())
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_id_asc".to_string())
                    .build(),
            )
            .build();

        let name_date_index = IndexModel::builder()
            .keys(doc! { "name": 1, "date_iso": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("name_date_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([date_index, owner_index, name_date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn create(&self, mut event: Event) -> AppResult<Event> {
        let result = self.collection().insert_one(&event).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError(
                    "동일한 이름과 날짜의 이벤트가 이미 존재합니다".to_string(),
                )
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        event.id = result.inserted_id.as_object_id();

        Ok(event)
    }

    async fn find_by_id(&self, event_id: &ObjectId) -> AppResult<Option<Event>> {
        self.collection()
            .find_one(doc! { "_id": event_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_name_and_date(&self, name: &str, date_iso: &str) -> AppResult<Option<Event>> {
        // 이름은 외부 입력이므로 새니타이징을 거친다
        let filter = sanitize_filter(&doc! {
            "name": name.trim(),
            "date_iso": date_iso,
        });

        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn add_attendee_if_available(
        &self,
        event_id: &ObjectId,
        user_id: &ObjectId,
    ) -> AppResult<Option<Event>> {
        debug!(
            "[EventRepository] 참가자 추가 시도: event_id={}, user_id={}",
            event_id, user_id
        );

        // 존재 + 미등록 + 여유 정원을 한 번의 조건부 업데이트로 검사한다.
        // 세 조건 중 무엇이 실패했는지는 여기서 구분하지 않는다.
        let filter = doc! {
            "_id": event_id,
            "attendees": { "$ne": user_id },
            "$expr": {
                "$lt": [
                    { "$size": { "$ifNull": ["$attendees", []] } },
                    "$capacity"
                ]
            }
        };
        let update = doc! { "$addToSet": { "attendees": user_id } };

        self.collection()
            .find_one_and_update(filter, update)
            .with_options(Self::after_update_options())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn remove_attendee(
        &self,
        event_id: &ObjectId,
        user_id: &ObjectId,
    ) -> AppResult<Option<Event>> {
        debug!(
            "[EventRepository] 참가자 제거 시도: event_id={}, user_id={}",
            event_id, user_id
        );

        let filter = doc! {
            "_id": event_id,
            "attendees": user_id,
        };
        let update = doc! { "$pull": { "attendees": user_id } };

        self.collection()
            .find_one_and_update(filter, update)
            .with_options(Self::after_update_options())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_owned(
        &self,
        event_id: &ObjectId,
        owner_id: &ObjectId,
        patch: Document,
    ) -> AppResult<Option<Event>> {
        let filter = doc! {
            "_id": event_id,
            "owner_id": owner_id,
        };

        // patch는 외부 입력에서 조립되므로 연산자/점 키를 제거한다
        let update = doc! { "$set": sanitize_patch(&patch) };

        self.collection()
            .find_one_and_update(filter, update)
            .with_options(Self::after_update_options())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_owned(&self, event_id: &ObjectId, owner_id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": event_id, "owner_id": owner_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn find_available(&self, query: &AvailableQuery) -> AppResult<Vec<EventListing>> {
        // 첫 $match는 요청 파라미터로 조립되므로 새니타이징을 거친다.
        // 날짜 하한에 필요한 "$gte"만 허용 목록에 넣는다.
        let mut match_stage = doc! { "date": { "$gte": query.from } };

        if let Some(ref name_query) = query.name_query {
            match_stage.insert(
                "name",
                Bson::RegularExpression(Regex {
                    pattern: escape_regex(name_query),
                    options: "i".to_string(),
                }),
            );
        }

        let pipeline = vec![
            doc! { "$match": sanitize_match(&match_stage, &["$gte"]) },
            Self::availability_stage(),
            doc! { "$match": { "availability": { "$gte": 1 } } },
            doc! {
                "$project": {
                    "name": 1, "date": 1, "location": 1, "capacity": 1,
                    "owner_id": 1, "attendees_count": 1, "availability": 1
                }
            },
            doc! { "$sort": { "date": 1 } },
            doc! { "$skip": query.skip },
            doc! { "$limit": query.limit },
        ];

        self.run_listing_pipeline(pipeline).await
    }

    async fn find_owned(&self, owner_id: &ObjectId) -> AppResult<Vec<EventListing>> {
        let pipeline = vec![
            doc! { "$match": { "owner_id": owner_id } },
            Self::availability_stage(),
            doc! {
                "$project": {
                    "name": 1, "date": 1, "location": 1, "capacity": 1,
                    "attendees_count": 1, "availability": 1
                }
            },
            doc! { "$sort": { "date": 1 } },
        ];

        self.run_listing_pipeline(pipeline).await
    }

    async fn find_by_attendee(&self, user_id: &ObjectId) -> AppResult<Vec<Event>> {
        let cursor = self
            .collection()
            .find(doc! { "attendees": user_id })
            .sort(doc! { "date": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
