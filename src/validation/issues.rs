//! 검증 위반 목록
//!
//! 검증 엔진이 만들어 내는 `{ field, code, message }` 목록과
//! 400 응답 본문으로의 직렬화를 담당합니다.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

/// 위반 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// 필드 누락 또는 타입 불일치
    InvalidType,
    /// 허용 목록에 없는 값
    InvalidEnumValue,
    TooSmall,
    TooBig,
    /// 형식 검사(URL 등) 실패
    InvalidString,
    /// 패턴/외부 조회 등 사용자 정의 검사 실패
    Custom,
    /// 본문이 JSON 이 아님
    InvalidJson,
}

/// 하나의 제약 위반
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// 위반한 필드 이름. 입력 전체에 대한 위반이면 빈 문자열
    pub field: String,
    pub code: IssueCode,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// 순서가 보존되는 위반 목록
///
/// 필드 순서대로 쌓이며, 한 필드에서 여러 제약이 실패하면 모두 기록됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn new() -> Self {
        Self::default()
    }

    /// 입력 전체에 대한 단일 위반
    pub fn single(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self(vec![ValidationIssue::new(field, code, message)])
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.0.iter()
    }

    /// 특정 필드에 대한 위반 메시지 목록
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|issue| issue.field == field)
    }

    /// 400 응답 본문
    pub fn to_response_body(&self) -> Value {
        json!({
            "msg": "Validation failed",
            "issues": self,
        })
    }
}

impl From<Vec<ValidationIssue>> for ValidationIssues {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|issue| {
                if issue.field.is_empty() {
                    issue.message.clone()
                } else {
                    format!("{}: {}", issue.field, issue.message)
                }
            })
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}
