//! 서버 및 실행 환경 설정 모듈
//!
//! 바인딩 주소, 실행 환경 프로파일, 비밀번호 해싱 강도를
//! 환경 변수에서 읽어 제공합니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 결정되며, 해싱 강도 같은
/// 환경 의존적인 기본값의 스위치 역할을 합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다. 미설정 시 `Production`입니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_default())
    }

    /// 환경 이름 문자열을 해석합니다. 알 수 없는 값은 `Production`으로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// bcrypt cost는 회원가입/로그인 지연과 직결되므로 환경별로 다르게 잡습니다.
/// 개발과 테스트에서는 최솟값으로 빠르게, 프로덕션에서는 고비용으로 둡니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 사용할 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 4-15 범위의 값이면 그 값을,
    /// 아니면 현재 환경의 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 환경별 기본 bcrypt cost
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩 포트. `PORT` 환경 변수, 기본값 8080.
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080)
    }

    /// 바인딩 호스트. `HOST` 환경 변수, 기본값 "0.0.0.0".
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}
