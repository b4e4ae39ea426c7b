//! # 요청 검증 모듈
//!
//! 선언적 스키마와 이를 해석하는 검증 엔진을 제공합니다.
//!
//! ```text
//! schema.rs      FieldDescriptor / Schema (설정)
//! schemas.rs     로그인, 회원가입, UserDto, UserIdParam 스키마
//! engine.rs      Validator (해석, 기본값 적용, 위반 수집)
//! membership.rs  식별자 존재 확인 기능 (주입)
//! issues.rs      위반 목록과 응답 본문
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_request_guard::validation::{schemas::USER_DTO, Validator};
//!
//! let normalized = Validator::new().validate(&USER_DTO, &body).await?;
//! assert_eq!(normalized["role"], "user");
//! ```

pub mod engine;
pub mod issues;
pub mod membership;
pub mod schema;
pub mod schemas;

pub use engine::{ValidationFailure, Validator};
pub use issues::{IssueCode, ValidationIssue, ValidationIssues};
pub use membership::{DirectoryMembership, MembershipCheck};
pub use schema::{AsyncCheck, FieldDescriptor, Refinement, Schema};
