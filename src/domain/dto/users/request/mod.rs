//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 도메인과 관련된 HTTP 요청 데이터 형태를 정의합니다.
//!
//! ## 검증 계층
//!
//! 이 모듈의 구조체에는 검증 로직이 없습니다. 요청은 먼저
//! `middlewares::RequestValidator`가 스키마로 검사하고, 통과한 정규화 값만
//! `ValidatedJson<T>` / `ValidatedPath<T>` 추출자를 통해 이 타입들로 변환됩니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::UserDto;
//! use crate::middlewares::ValidatedJson;
//!
//! async fn create_user(payload: ValidatedJson<UserDto>) -> Result<HttpResponse, AppError> {
//!     let dto = payload.into_inner(); // role, imgUrl 등 기본값이 채워져 있음
//!     ...
//! }
//! ```

pub mod auth_request;
pub mod user_dto;
pub mod user_id_param;

pub use auth_request::{LoginCredentials, SignupRequest};
pub use user_dto::{UserDto, UserRole};
pub use user_id_param::UserIdParam;
