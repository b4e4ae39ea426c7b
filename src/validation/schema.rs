//! 선언적 스키마
//!
//! 필드 제약을 조건문이 아닌 설정 구조로 표현합니다. 각 스키마는 순서가 있는
//! `FieldDescriptor` 목록이며, 해석은 [`Validator`](super::Validator)가 담당합니다.
//!
//! ```rust,ignore
//! let schema = Schema::new("user_dto")
//!     .field(FieldDescriptor::string("username")
//!         .required_message("Please provide username")
//!         .length(2, 50))
//!     .field(FieldDescriptor::string("role")
//!         .one_of(&["admin", "user"])
//!         .default_value("user"));
//! ```

use regex::Regex;

/// 길이/허용값 이후에 적용되는 추가 검사
#[derive(Debug, Clone)]
pub enum Refinement {
    /// 정규식과 일치해야 함
    Pattern { regex: Regex, message: &'static str },
    /// 절대 URL 이어야 함. `allow_empty`이면 빈 문자열은 검사하지 않음
    Url {
        message: &'static str,
        allow_empty: bool,
    },
}

/// 외부 상태에 의존하는 비동기 검사
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncCheck {
    /// 값이 현재 알려진 식별자 집합에 속해야 함
    Membership { message: &'static str },
}

/// 필드 하나의 제약 설명
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub required: bool,
    pub required_message: Option<&'static str>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub allowed: Option<&'static [&'static str]>,
    pub refinements: Vec<Refinement>,
    pub default: Option<&'static str>,
    pub async_check: Option<AsyncCheck>,
}

impl FieldDescriptor {
    /// 필수 문자열 필드
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            required_message: None,
            min_length: None,
            max_length: None,
            allowed: None,
            refinements: Vec::new(),
            default: None,
            async_check: None,
        }
    }

    /// 누락 시 사용할 메시지
    pub fn required_message(mut self, message: &'static str) -> Self {
        self.required_message = Some(message);
        self
    }

    pub fn min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn length(self, min: u64, max: u64) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    pub fn pattern(mut self, regex: Regex, message: &'static str) -> Self {
        self.refinements.push(Refinement::Pattern { regex, message });
        self
    }

    /// 비어 있지 않을 때만 URL 형식을 요구
    pub fn url_or_empty(mut self, message: &'static str) -> Self {
        self.refinements.push(Refinement::Url {
            message,
            allow_empty: true,
        });
        self
    }

    /// 누락 시 채워 넣을 기본값. 기본값이 있는 필드는 필수가 아님
    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self.required = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn membership(mut self, message: &'static str) -> Self {
        self.async_check = Some(AsyncCheck::Membership { message });
        self
    }
}

/// 이름이 붙은 필드 설명 목록
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn requires_membership(&self) -> bool {
        self.fields.iter().any(|field| field.async_check.is_some())
    }
}
