//! HTTP 핸들러 모듈
//!
//! RESTful API 엔드포인트의 요청 처리를 담당합니다.
//! 핸들러는 입력 검증과 DTO 변환만 수행하고,
//! 비즈니스 규칙은 모두 서비스 계층에 위임합니다.
//!
//! # 상태 코드 규칙
//!
//! | 상황 | 상태 코드 |
//! |------|-----------|
//! | 리소스 생성 | 201 Created |
//! | 조회/수정/등록/취소 성공 | 200 OK |
//! | 입력값 오류, 원인 불명 등록 실패 | 400 Bad Request |
//! | 인증 실패 | 401 Unauthorized |
//! | 리소스 없음 / 소유권 없음 | 404 Not Found |
//! | 중복, 정원 초과 등 규칙 위반 | 409 Conflict |

pub mod auth;
pub mod events;
pub mod users;
