//! # Application Error Handling System
//!
//! 요청 검증 서비스 전역에서 사용하는 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | AppError | HTTP Status |
//! |------|----------|-------------|
//! | 스키마 위반 | `SchemaViolation` | 400 Bad Request |
//! | 상위 단계 애플리케이션 에러 | `UserApi` | 에러가 가진 상태 코드 |
//! | 리소스 없음 | `NotFound` | 404 Not Found |
//! | 중복 데이터 | `ConflictError` | 409 Conflict |
//! | 사용자 저장소 장애 | `DirectoryError` | 500 Internal Server Error |
//! | 예상치 못한 오류 | `InternalError` | 500 Internal Server Error |
//!
//! ## 응답 형식
//!
//! 모든 응답은 `msg` 키를 사용합니다. 5xx 응답은 원인을 노출하지 않고
//! 고정 메시지만 내려보내며, 실제 원인은 서버 로그에만 남깁니다.
//!
//! ```json
//! { "msg": "Internal server error." }
//! ```
//!
//! 스키마 위반은 위반 목록을 함께 포함합니다.
//!
//! ```json
//! {
//!   "msg": "Validation failed",
//!   "issues": [
//!     { "field": "email", "code": "custom", "message": "Invalid email format" }
//!   ]
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationIssues;

/// 5xx 응답에 사용하는 고정 메시지
pub const INTERNAL_SERVER_ERROR_MSG: &str = "Internal server error.";

/// 파이프라인 상위 단계가 이미 판정한 애플리케이션 에러
///
/// 예: "user not found" 를 404 로 알리는 경우. 게이트가 적용된 검증
/// 미들웨어는 이 에러가 요청에 기록되어 있으면 검증보다 먼저 응답합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({code})")]
pub struct UserApiError {
    pub code: u16,
    pub message: String,
}

impl UserApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// 유효하지 않은 코드는 500 으로 취급
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    SchemaViolation(ValidationIssues),

    #[error("{0}")]
    UserApi(UserApiError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("User directory error: {0}")]
    DirectoryError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ValidationIssues> for AppError {
    fn from(issues: ValidationIssues) -> Self {
        AppError::SchemaViolation(issues)
    }
}

impl From<UserApiError> for AppError {
    fn from(err: UserApiError) -> Self {
        AppError::UserApi(err)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SchemaViolation(_) => StatusCode::BAD_REQUEST,
            AppError::UserApi(err) => err.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DirectoryError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::SchemaViolation(issues) => issues.to_response_body(),
            // 상위 단계 에러는 상태 코드와 무관하게 메시지를 그대로 전달
            AppError::UserApi(err) => json!({ "msg": err.message }),
            _ if status.is_server_error() => {
                log::error!("내부 오류 응답: {}", self);
                json!({ "msg": INTERNAL_SERVER_ERROR_MSG })
            }
            _ => json!({ "msg": self.to_string() }),
        };

        HttpResponse::build(status).json(body)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 덧붙여 `AppError::InternalError`로 변환
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{IssueCode, ValidationIssue};
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    async fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = to_bytes(error.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_schema_violation_response() {
        let issues = ValidationIssues::from(vec![ValidationIssue::new(
            "email",
            IssueCode::Custom,
            "Invalid email format",
        )]);
        let response = AppError::SchemaViolation(issues).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_api_error_keeps_its_status() {
        let error = AppError::from(UserApiError::not_found("User not found"));

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_user_api_error_with_invalid_code_falls_back_to_500() {
        let error = UserApiError::new(42, "weird");

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("username taken".to_string());

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_cause() {
        let error = AppError::DirectoryError("connection reset".to_string());
        let body = body_json(&error).await;

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "msg": INTERNAL_SERVER_ERROR_MSG }));
    }

    #[actix_web::test]
    async fn test_user_api_error_body_uses_msg_key() {
        let error = AppError::from(UserApiError::new(403, "Editing other users is not allowed"));
        let body = body_json(&error).await;

        assert_eq!(body, json!({ "msg": "Editing other users is not allowed" }));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
