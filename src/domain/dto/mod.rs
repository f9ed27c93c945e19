//! 요청/응답 DTO 모듈
//!
//! HTTP 경계에서 사용하는 데이터 전송 객체들을 제공합니다.
//! 요청 DTO는 `validator` derive로 입력 검증을 수행하고,
//! 응답 DTO는 엔티티에서 민감 정보를 제거한 형태로 변환됩니다.

pub mod auth;
pub mod events;
pub mod users;
