//! 이벤트 요청 DTO
//!
//! 이벤트 생성/수정 요청과 가용 이벤트 목록 조회 쿼리의 구조를 정의합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 이벤트 생성 요청 DTO
///
/// 날짜가 미래인지 여부는 비즈니스 규칙이므로 서비스 계층에서 검증합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// 이벤트 이름 (1-120자)
    #[validate(length(min = 1, max = 120, message = "이벤트 이름은 1-120자 사이여야 합니다"))]
    pub name: String,

    /// 이벤트 일시 (ISO 8601)
    pub date: DateTime<Utc>,

    /// 이벤트 장소 (1-200자)
    #[validate(length(min = 1, max = 200, message = "장소는 1-200자 사이여야 합니다"))]
    pub location: String,

    /// 정원 (1-100000)
    #[validate(range(min = 1, max = 100_000, message = "정원은 1-100000 사이여야 합니다"))]
    pub capacity: i64,
}

/// 이벤트 수정 요청 DTO
///
/// 모든 필드가 선택 사항이지만, 최소 한 개의 필드는 있어야 합니다.
/// 정원 축소가 현재 참가자 수보다 작아지는 경우는 서비스 계층에서 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_at_least_one_field"))]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 120, message = "이벤트 이름은 1-120자 사이여야 합니다"))]
    pub name: Option<String>,

    pub date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 200, message = "장소는 1-200자 사이여야 합니다"))]
    pub location: Option<String>,

    #[validate(range(min = 1, max = 100_000, message = "정원은 1-100000 사이여야 합니다"))]
    pub capacity: Option<i64>,
}

/// 최소 한 개의 수정 필드가 있는지 검증
fn validate_at_least_one_field(req: &UpdateEventRequest) -> Result<(), ValidationError> {
    if req.name.is_none() && req.date.is_none() && req.location.is_none() && req.capacity.is_none()
    {
        return Err(ValidationError::new("empty_patch")
            .with_message("수정할 필드를 최소 한 개 이상 지정해야 합니다".into()));
    }
    Ok(())
}

/// 가용 이벤트 목록 조회 쿼리 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableEventsQuery {
    /// 조회 시작 일시 (기본값: 현재 시각)
    pub from: Option<DateTime<Utc>>,
    /// 페이지 크기 (1-100으로 고정, 기본값: 50)
    pub limit: Option<i64>,
    /// 페이지 번호 (1부터 시작)
    pub page: Option<i64>,
    /// 이벤트 이름 부분 일치 검색어
    pub q: Option<String>,
}

impl AvailableEventsQuery {
    /// 1-100 범위로 고정된 페이지 크기
    pub fn clamped_limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 100)
    }

    /// 페이지 번호에서 계산된 skip 오프셋
    ///
    /// 페이지 번호는 신뢰할 수 없는 입력이므로 포화 연산으로 계산합니다.
    pub fn skip(&self) -> u64 {
        let page = self.page.unwrap_or(1).max(1);
        page.saturating_sub(1).saturating_mul(self.clamped_limit()) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_event_request_rejects_zero_capacity() {
        let request = CreateEventRequest {
            name: "NodeConf".to_string(),
            date: Utc::now(),
            location: "Madrid".to_string(),
            capacity: 0,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_event_requires_at_least_one_field() {
        let empty = UpdateEventRequest {
            name: None,
            date: None,
            location: None,
            capacity: None,
        };

        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_query_limit_clamped_and_skip_derived() {
        let query = AvailableEventsQuery {
            from: None,
            limit: Some(500),
            page: Some(3),
            q: None,
        };

        assert_eq!(query.clamped_limit(), 100);
        assert_eq!(query.skip(), 200);

        let defaults = AvailableEventsQuery {
            from: None,
            limit: None,
            page: None,
            q: None,
        };

        assert_eq!(defaults.clamped_limit(), 50);
        assert_eq!(defaults.skip(), 0);
    }

    #[test]
    fn test_skip_saturates_on_extreme_page_numbers() {
        let huge = AvailableEventsQuery {
            from: None,
            limit: Some(100),
            page: Some(i64::MAX),
            q: None,
        };

        // 패닉이나 래핑 없이 i64::MAX에서 포화된다
        assert_eq!(huge.skip(), i64::MAX as u64);

        let negative = AvailableEventsQuery {
            from: None,
            limit: None,
            page: Some(i64::MIN),
            q: None,
        };

        assert_eq!(negative.skip(), 0);
    }
}
