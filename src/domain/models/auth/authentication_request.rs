//! 인증 요구 수준 모델

/// 라우트별 인증 요구 수준
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 유효한 토큰이 반드시 필요 (실패 시 401)
    Required,
    /// 토큰이 있으면 검증하되, 없어도 요청 진행 허용
    Optional,
}
