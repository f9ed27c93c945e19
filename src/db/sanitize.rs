//! 쿼리 새니타이즈 레이어
//!
//! 요청 데이터에서 간접적으로 유래한 필터/패치 구조가 MongoDB 쿼리 플래너에
//! 도달하기 전에 연산자 주입(operator injection)을 차단합니다.
//! 클라이언트가 리터럴 값이 있어야 할 자리에 `{"$gt": ""}` 같은 연산자 객체를
//! 넣거나, `"profile.role"` 같은 점(.) 경로로 중첩 필드를 건드리는 것을 막습니다.
//!
//! ## 알고리즘 (재귀, 깊이 우선)
//!
//! - 배열: 각 원소를 재귀적으로 새니타이즈하며 순서와 길이를 보존합니다.
//! - 불투명한 리프 타입(DateTime, ObjectId, Binary, 정규식 등)은 키-값 구조가
//!   아니므로 재귀하지 않고 그대로 통과시킵니다.
//! - 문서: `.`이 포함된 키는 제거, `$`로 시작하는 키는 호출별 허용 목록에
//!   정확히 일치하는 항목이 없으면 제거, 나머지 키는 값에 재귀합니다.
//!
//! ## 실패 의미론
//!
//! 새니타이즈는 절대 에러를 내지 않습니다. 허용되지 않는 키는 조용히
//! 제거됩니다(fail-closed). 주입 시도는 "키 무시"로 강등될 뿐이므로,
//! 테스트는 예외가 아니라 출력에서 키의 *부재*를 검증해야 합니다.
//!
//! ## 진입점
//!
//! 세 진입점은 의도를 구분할 뿐 동일한 알고리즘을 공유합니다:
//!
//! - [`sanitize_filter`] / [`sanitize_filter_with`] - 읽기 필터용
//! - [`sanitize_patch`] - 쓰기 패치용 (연산자 절대 불허: 패치는 순수한
//!   field:value 쌍이어야 하며, 연산자형 패치는 임의 필드 변형을 허용하게 됨)
//! - [`sanitize_match`] - 집계 파이프라인의 `$match` 스테이지용

use mongodb::bson::{Bson, Document};

/// 허용 목록 없이 읽기 필터를 새니타이즈합니다.
///
/// 기본 정책: 연산자 키(`$...`)와 점 경로 키는 모두 제거됩니다.
pub fn sanitize_filter(filter: &Document) -> Document {
    sanitize_document(filter, &[])
}

/// 호출별 연산자 허용 목록과 함께 읽기 필터를 새니타이즈합니다.
///
/// `allowed`에 정확히 일치하는 `$` 키만 통과합니다. 점 경로 키는
/// 허용 목록과 무관하게 항상 제거됩니다.
pub fn sanitize_filter_with(filter: &Document, allowed: &[&str]) -> Document {
    sanitize_document(filter, allowed)
}

/// 쓰기 패치를 새니타이즈합니다. 연산자는 어떤 경우에도 허용되지 않습니다.
pub fn sanitize_patch(patch: &Document) -> Document {
    sanitize_document(patch, &[])
}

/// 집계 파이프라인의 `$match` 스테이지 내용을 새니타이즈합니다.
///
/// 기본 정책은 [`sanitize_filter`]와 같지만, 파이프라인을 조립하는
/// 호출 지점이 다르므로 별도 진입점으로 노출합니다.
pub fn sanitize_match(stage: &Document, allowed: &[&str]) -> Document {
    sanitize_document(stage, allowed)
}

/// 리터럴 문자열을 패턴 매칭에 안전한 형태로 변환합니다.
///
/// 모든 정규식 메타문자를 백슬래시로 이스케이프합니다.
/// 사용자 입력이 패턴 기반 쿼리에 삽입될 때마다 사용합니다.
pub fn escape_regex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']'
            | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn sanitize_document(doc: &Document, allowed: &[&str]) -> Document {
    let mut out = Document::new();
    for (key, value) in doc {
        // 점 경로 키는 중첩 필드/연산자 접근을 허용하므로 항상 제거
        if key.contains('.') {
            continue;
        }
        if key.starts_with('$') && !allowed.contains(&key.as_str()) {
            continue;
        }
        out.insert(key.clone(), sanitize_bson(value, allowed));
    }
    out
}

fn sanitize_bson(value: &Bson, allowed: &[&str]) -> Bson {
    match value {
        Bson::Array(items) => Bson::Array(
            items
                .iter()
                .map(|item| sanitize_bson(item, allowed))
                .collect(),
        ),
        Bson::Document(doc) => Bson::Document(sanitize_document(doc, allowed)),
        // DateTime, ObjectId, Binary, 정규식, 스칼라 등은 리프로 취급
        other => other.clone(),
    }
}
