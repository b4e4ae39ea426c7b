//! 스키마 해석 엔진
//!
//! 입력 JSON 을 [`Schema`]에 비추어 검사하고, 통과하면 기본값이 채워지고
//! 정의되지 않은 키가 제거된 정규화 값을 돌려줍니다. 위반은 fail-fast 하지 않고
//! 모든 필드에 대해 순서대로 수집합니다.
//!
//! 멤버십 검사가 있는 스키마는 동기 검사를 모두 마친 뒤 한 번 대기합니다.

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;
use validator::{ValidateLength, ValidateUrl};

use crate::core::AppError;
use crate::validation::issues::{IssueCode, ValidationIssue, ValidationIssues};
use crate::validation::membership::MembershipCheck;
use crate::validation::schema::{AsyncCheck, FieldDescriptor, Refinement, Schema};

#[derive(Debug, Error)]
pub enum ValidationFailure {
    /// 하나 이상의 제약 위반
    #[error("{0}")]
    Rejected(ValidationIssues),

    /// 멤버십 조회 자체가 실패
    #[error("membership lookup failed: {0}")]
    Lookup(AppError),

    #[error("schema `{0}` requires a membership check but none is configured")]
    MissingMembership(&'static str),
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        match failure {
            ValidationFailure::Rejected(issues) => AppError::from(issues),
            ValidationFailure::Lookup(err) => err,
            other => AppError::InternalError(other.to_string()),
        }
    }
}

/// 필드 하나의 동기 검사 결과
enum FieldValue {
    Absent,
    Defaulted(&'static str),
    Checked(String),
    Invalid,
}

#[derive(Clone, Default)]
pub struct Validator {
    membership: Option<Arc<dyn MembershipCheck>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_membership(membership: Arc<dyn MembershipCheck>) -> Self {
        Self {
            membership: Some(membership),
        }
    }

    pub async fn validate(&self, schema: &Schema, input: &Value) -> Result<Value, ValidationFailure> {
        let object = match input {
            Value::Object(object) => object,
            other => {
                return Err(ValidationFailure::Rejected(ValidationIssues::single(
                    "",
                    IssueCode::InvalidType,
                    format!("Expected object, received {}", json_type_name(other)),
                )));
            }
        };

        let mut issues = ValidationIssues::new();
        let mut normalized = Map::new();
        let mut pending = Vec::new();

        for field in schema.fields() {
            match check_field(field, object.get(field.name), &mut issues) {
                FieldValue::Absent | FieldValue::Invalid => {}
                FieldValue::Defaulted(default) => {
                    normalized.insert(field.name.to_string(), Value::String(default.to_string()));
                }
                FieldValue::Checked(value) => {
                    if let Some(check) = &field.async_check {
                        pending.push((field.name, check, value.clone()));
                    }
                    normalized.insert(field.name.to_string(), Value::String(value));
                }
            }
        }

        for (name, check, value) in pending {
            let AsyncCheck::Membership { message } = check;
            let membership = self
                .membership
                .as_ref()
                .ok_or(ValidationFailure::MissingMembership(schema.name()))?;

            let known = membership
                .is_known(&value)
                .await
                .map_err(ValidationFailure::Lookup)?;

            if !known {
                issues.push(ValidationIssue::new(name, IssueCode::Custom, *message));
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(normalized))
        } else {
            Err(ValidationFailure::Rejected(issues))
        }
    }
}

fn check_field(field: &FieldDescriptor, raw: Option<&Value>, issues: &mut ValidationIssues) -> FieldValue {
    let value = match raw {
        None => {
            if let Some(default) = field.default {
                return FieldValue::Defaulted(default);
            }
            if field.required {
                issues.push(ValidationIssue::new(
                    field.name,
                    IssueCode::InvalidType,
                    field.required_message.unwrap_or("Required"),
                ));
                return FieldValue::Invalid;
            }
            return FieldValue::Absent;
        }
        Some(Value::String(value)) => value.clone(),
        Some(other) => {
            issues.push(ValidationIssue::new(
                field.name,
                IssueCode::InvalidType,
                format!("Expected string, received {}", json_type_name(other)),
            ));
            return FieldValue::Invalid;
        }
    };

    let before = issues.len();

    if let Some(allowed) = field.allowed {
        if !allowed.contains(&value.as_str()) {
            let expected: Vec<String> = allowed.iter().map(|v| format!("'{}'", v)).collect();
            issues.push(ValidationIssue::new(
                field.name,
                IssueCode::InvalidEnumValue,
                format!(
                    "Invalid enum value. Expected {}, received '{}'",
                    expected.join(" | "),
                    value
                ),
            ));
        }
    }

    if let Some(min) = field.min_length {
        if !value.validate_length(Some(min), None, None) {
            issues.push(ValidationIssue::new(
                field.name,
                IssueCode::TooSmall,
                format!("String must contain at least {} character(s)", min),
            ));
        }
    }

    if let Some(max) = field.max_length {
        if !value.validate_length(None, Some(max), None) {
            issues.push(ValidationIssue::new(
                field.name,
                IssueCode::TooBig,
                format!("String must contain at most {} character(s)", max),
            ));
        }
    }

    for refinement in &field.refinements {
        match refinement {
            Refinement::Pattern { regex, message } => {
                if !regex.is_match(&value) {
                    issues.push(ValidationIssue::new(field.name, IssueCode::Custom, *message));
                }
            }
            Refinement::Url { message, allow_empty } => {
                if !(*allow_empty && value.is_empty()) && !value.validate_url() {
                    issues.push(ValidationIssue::new(field.name, IssueCode::InvalidString, *message));
                }
            }
        }
    }

    if issues.len() > before {
        FieldValue::Invalid
    } else {
        FieldValue::Checked(value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::schemas::{LOGIN_CREDENTIALS, SIGNUP_INPUT, USER_DTO, USER_ID_PARAM};
    use serde_json::json;
    use std::collections::HashSet;

    fn valid_user() -> Value {
        json!({
            "username": "ada",
            "password": "secret1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        })
    }

    fn rejected(result: Result<Value, ValidationFailure>) -> ValidationIssues {
        match result {
            Err(ValidationFailure::Rejected(issues)) => issues,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    fn known_ids() -> Validator {
        let ids: HashSet<String> = ["u1", "u2"].iter().map(|s| s.to_string()).collect();
        Validator::with_membership(Arc::new(ids))
    }

    #[actix_web::test]
    async fn test_user_dto_applies_defaults() {
        let normalized = Validator::new().validate(&USER_DTO, &valid_user()).await.unwrap();

        assert_eq!(normalized["role"], "user");
        assert_eq!(normalized["imgUrl"], "");
        assert_eq!(normalized["jwtToken"], "");
        assert_eq!(normalized["refreshToken"], "");
        assert_eq!(normalized["id"], "");
        assert_eq!(normalized["username"], "ada");
    }

    #[actix_web::test]
    async fn test_user_dto_keeps_supplied_optional_values() {
        let mut input = valid_user();
        input["role"] = json!("admin");
        input["imgUrl"] = json!("https://cdn.example.com/ada.png");

        let normalized = Validator::new().validate(&USER_DTO, &input).await.unwrap();

        assert_eq!(normalized["role"], "admin");
        assert_eq!(normalized["imgUrl"], "https://cdn.example.com/ada.png");
    }

    #[actix_web::test]
    async fn test_short_password_is_rejected() {
        let mut input = valid_user();
        input["password"] = json!("12345");

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);

        assert_eq!(
            issues.messages_for("password"),
            vec!["String must contain at least 6 character(s)"]
        );
    }

    #[actix_web::test]
    async fn test_missing_email_uses_required_message() {
        let mut input = valid_user();
        input.as_object_mut().unwrap().remove("email");

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);

        assert_eq!(issues.messages_for("email"), vec!["Please provide email"]);
    }

    #[actix_web::test]
    async fn test_malformed_email_is_rejected() {
        let mut input = valid_user();
        input["email"] = json!("not-an-email");

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);

        assert_eq!(issues.messages_for("email"), vec!["Invalid email format"]);
    }

    #[actix_web::test]
    async fn test_all_violations_are_collected_in_field_order() {
        let input = json!({
            "username": "a",
            "password": "123",
            "firstName": "Ada",
            "email": "nope",
            "role": "root"
        });

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);
        let fields: Vec<&str> = issues.iter().map(|issue| issue.field.as_str()).collect();

        assert_eq!(fields, vec!["username", "password", "lastName", "email", "role"]);
        assert_eq!(issues.messages_for("lastName"), vec!["Please provide last name"]);
        assert_eq!(
            issues.messages_for("role"),
            vec!["Invalid enum value. Expected 'admin' | 'user', received 'root'"]
        );
    }

    #[actix_web::test]
    async fn test_length_upper_bound() {
        let mut input = valid_user();
        input["firstName"] = json!("x".repeat(51));

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);

        assert_eq!(
            issues.messages_for("firstName"),
            vec!["String must contain at most 50 character(s)"]
        );
    }

    #[actix_web::test]
    async fn test_wrong_type_and_null_are_rejected() {
        let mut input = valid_user();
        input["username"] = json!(42);
        input["lastName"] = Value::Null;

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);

        assert_eq!(issues.messages_for("username"), vec!["Expected string, received number"]);
        assert_eq!(issues.messages_for("lastName"), vec!["Expected string, received null"]);
    }

    #[actix_web::test]
    async fn test_img_url_must_be_absolute_when_present() {
        let mut input = valid_user();
        input["imgUrl"] = json!("not a url");

        let issues = rejected(Validator::new().validate(&USER_DTO, &input).await);
        assert_eq!(issues.messages_for("imgUrl"), vec!["Invalid URL format"]);

        input["imgUrl"] = json!("");
        let normalized = Validator::new().validate(&USER_DTO, &input).await.unwrap();
        assert_eq!(normalized["imgUrl"], "");
    }

    #[actix_web::test]
    async fn test_unknown_keys_are_stripped() {
        let mut input = valid_user();
        input["isAdmin"] = json!(true);

        let normalized = Validator::new().validate(&USER_DTO, &input).await.unwrap();

        assert!(normalized.get("isAdmin").is_none());
    }

    #[actix_web::test]
    async fn test_validation_is_idempotent() {
        let validator = Validator::new();
        let first = validator.validate(&USER_DTO, &valid_user()).await.unwrap();
        let second = validator.validate(&USER_DTO, &valid_user()).await.unwrap();
        let again = validator.validate(&USER_DTO, &first).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first, again);
    }

    #[actix_web::test]
    async fn test_non_object_input_is_rejected() {
        let issues = rejected(Validator::new().validate(&USER_DTO, &json!(["ada"])).await);

        assert_eq!(issues.messages_for(""), vec!["Expected object, received array"]);
    }

    #[actix_web::test]
    async fn test_known_user_id_is_accepted() {
        let normalized = known_ids()
            .validate(&USER_ID_PARAM, &json!({ "id": "u1" }))
            .await
            .unwrap();

        assert_eq!(normalized, json!({ "id": "u1" }));
    }

    #[actix_web::test]
    async fn test_unknown_user_id_is_rejected() {
        let issues = rejected(known_ids().validate(&USER_ID_PARAM, &json!({ "id": "u3" })).await);

        assert_eq!(issues.messages_for("id"), vec!["Invalid user ID format"]);
    }

    #[actix_web::test]
    async fn test_membership_without_capability_is_internal() {
        let result = Validator::new().validate(&USER_ID_PARAM, &json!({ "id": "u1" })).await;

        assert!(matches!(result, Err(ValidationFailure::MissingMembership("user_id_param"))));
    }

    struct FailingLookup;

    #[async_trait::async_trait]
    impl MembershipCheck for FailingLookup {
        async fn is_known(&self, _id: &str) -> crate::core::AppResult<bool> {
            Err(AppError::DirectoryError("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_membership_lookup_failure_is_not_a_violation() {
        let result = Validator::with_membership(Arc::new(FailingLookup))
            .validate(&USER_ID_PARAM, &json!({ "id": "u1" }))
            .await;

        let failure = match result {
            Err(failure @ ValidationFailure::Lookup(_)) => failure,
            other => panic!("expected lookup failure, got {:?}", other),
        };
        assert!(matches!(AppError::from(failure), AppError::DirectoryError(_)));
    }

    #[actix_web::test]
    async fn test_login_requires_non_empty_identifier() {
        let issues = rejected(
            Validator::new()
                .validate(&LOGIN_CREDENTIALS, &json!({ "identifier": "", "secret": "x" }))
                .await,
        );

        assert!(issues.has_field("identifier"));
        assert!(!issues.has_field("secret"));
    }

    #[actix_web::test]
    async fn test_signup_accepts_full_payload() {
        let normalized = Validator::new().validate(&SIGNUP_INPUT, &valid_user()).await.unwrap();

        assert_eq!(normalized, valid_user());
    }
}
