//! 상위 단계 에러 기록과 게이트 모드
//!
//! 파이프라인의 앞선 단계는 이미 판정한 에러를 요청 extension 에 기록할 수
//! 있습니다. 게이트가 적용된 검증 미들웨어(`user_dto`, `user_id_param`)는
//! 검증에 앞서 이 기록을 확인합니다.
//!
//! ```rust,ignore
//! use crate::middlewares::{RecordUpstreamError, UpstreamError};
//!
//! req.record_upstream_error(UpstreamError::UserApi(UserApiError::not_found("User not found")));
//! ```

use actix_web::HttpMessage;

use crate::core::errors::UserApiError;

/// 앞선 단계가 남긴 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// 상태 코드와 메시지를 가진 애플리케이션 에러
    UserApi(UserApiError),
    /// 분류되지 않은 에러. 원인은 서버 로그에만 남김
    Unrecognized(String),
}

impl From<UserApiError> for UpstreamError {
    fn from(err: UserApiError) -> Self {
        UpstreamError::UserApi(err)
    }
}

pub trait RecordUpstreamError {
    fn record_upstream_error(&self, err: UpstreamError);
}

impl<T: HttpMessage> RecordUpstreamError for T {
    fn record_upstream_error(&self, err: UpstreamError) {
        self.extensions_mut().insert(err);
    }
}

/// 게이트 동작 방식
///
/// - `Corrected`: 상위 에러가 있으면 그 에러로 응답하고 끝. 없으면 검증 후 진행
/// - `Legacy`: 상위 `UserApi` 에러가 있을 때만 응답하고(검증 결과는 로그만),
///   없으면 검증 없이 500 으로 응답. 회귀 추적용으로만 사용
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateMode {
    #[default]
    Corrected,
    Legacy,
}

impl GateMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "corrected" => Some(GateMode::Corrected),
            "legacy" => Some(GateMode::Legacy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GateMode::Corrected => "corrected",
            GateMode::Legacy => "legacy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_gate_mode_parse() {
        assert_eq!(GateMode::parse("legacy"), Some(GateMode::Legacy));
        assert_eq!(GateMode::parse(" Corrected "), Some(GateMode::Corrected));
        assert_eq!(GateMode::parse("strict"), None);
        assert_eq!(GateMode::default(), GateMode::Corrected);
    }

    #[test]
    fn test_record_upstream_error_on_request() {
        let req = TestRequest::default().to_http_request();
        req.record_upstream_error(UserApiError::not_found("User not found").into());

        let recorded = req.extensions().get::<UpstreamError>().cloned();
        assert_eq!(
            recorded,
            Some(UpstreamError::UserApi(UserApiError::new(404, "User not found")))
        );
    }
}
