//! 엔드포인트별 스키마 정의
//!
//! 로그인, 회원가입, 사용자 DTO, 사용자 ID 경로 파라미터에 대한 제약을
//! [`Schema`] 설정으로 선언합니다.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::dto::users::request::UserRole;
use crate::validation::schema::{FieldDescriptor, Schema};

/// 느슨한 `local@domain.tld` 형태 검사. RFC 5322 전체를 다루지 않음
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

pub const ROLES: &[&str] = &[UserRole::Admin.as_str(), UserRole::User.as_str()];

fn username() -> FieldDescriptor {
    FieldDescriptor::string("username")
        .required_message("Please provide username")
        .length(2, 50)
}

fn password() -> FieldDescriptor {
    FieldDescriptor::string("password")
        .required_message("Please provide password")
        .min_length(6)
}

fn first_name() -> FieldDescriptor {
    FieldDescriptor::string("firstName")
        .required_message("Please provide first name")
        .length(2, 50)
}

fn last_name() -> FieldDescriptor {
    FieldDescriptor::string("lastName")
        .required_message("Please provide last name")
        .length(2, 50)
}

fn email() -> FieldDescriptor {
    FieldDescriptor::string("email")
        .required_message("Please provide email")
        .pattern(EMAIL_PATTERN.clone(), "Invalid email format")
}

pub static LOGIN_CREDENTIALS: Lazy<Schema> = Lazy::new(|| {
    Schema::new("login_credentials")
        .field(
            FieldDescriptor::string("identifier")
                .required_message("Please provide identifier")
                .min_length(1),
        )
        .field(
            FieldDescriptor::string("secret")
                .required_message("Please provide secret")
                .min_length(1),
        )
});

pub static SIGNUP_INPUT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("signup_input")
        .field(username())
        .field(password())
        .field(first_name())
        .field(last_name())
        .field(email())
});

pub static USER_DTO: Lazy<Schema> = Lazy::new(|| {
    Schema::new("user_dto")
        .field(FieldDescriptor::string("id").default_value(""))
        .field(username())
        .field(password())
        .field(first_name())
        .field(last_name())
        .field(email())
        .field(FieldDescriptor::string("role").one_of(ROLES).default_value(UserRole::User.as_str()))
        .field(
            FieldDescriptor::string("imgUrl")
                .url_or_empty("Invalid URL format")
                .default_value(""),
        )
        // 서버가 발급하는 값
        .field(FieldDescriptor::string("jwtToken").default_value(""))
        .field(FieldDescriptor::string("refreshToken").default_value(""))
});

pub static USER_ID_PARAM: Lazy<Schema> = Lazy::new(|| {
    Schema::new("user_id_param")
        .field(FieldDescriptor::string("id").membership("Invalid user ID format"))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_PATTERN.is_match("ada@example.com"));
        assert!(EMAIL_PATTERN.is_match("a.b+c@sub.example.co"));
        assert!(!EMAIL_PATTERN.is_match("not-an-email"));
        assert!(!EMAIL_PATTERN.is_match("ada@example"));
        assert!(!EMAIL_PATTERN.is_match("ada lovelace@example.com"));
    }

    #[test]
    fn test_only_user_id_param_needs_membership() {
        assert!(USER_ID_PARAM.requires_membership());
        assert!(!USER_DTO.requires_membership());
        assert!(!SIGNUP_INPUT.requires_membership());
        assert!(!LOGIN_CREDENTIALS.requires_membership());
    }

    #[test]
    fn test_user_dto_server_populated_fields_have_empty_defaults() {
        for name in ["imgUrl", "jwtToken", "refreshToken", "id"] {
            let field = USER_DTO.fields().iter().find(|f| f.name == name).unwrap();
            assert_eq!(field.default, Some(""), "{} default", name);
        }
    }
}
