//! 인증 관련 설정 관리 모듈
//!
//! JWT 토큰 발급과 검증에 필요한 설정값들을 환경 변수에서 읽어옵니다.

use std::env;

/// JWT 토큰 설정
///
/// HS256 서명에 사용되는 비밀키와 토큰 만료 시간을 관리합니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간
/// - **프로덕션**: 액세스 토큰 1시간 이하
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 보안 요구사항
    ///
    /// - 최소 256비트 (32바이트) 길이
    /// - 암호학적으로 안전한 랜덤 생성
    /// - 환경별로 다른 키 사용
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 1시간
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_HOURS="24"
    /// ```
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1)
    }
}
