//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::from_dto(validated_dto);
//! assert!(!user.id.is_empty());
//! ```

pub mod user;

pub use user::User;
