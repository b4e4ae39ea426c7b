//! 사용자 관리 서비스 모듈
//!
//! 검증을 통과한 사용자 DTO 를 저장소에 반영하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(directory.clone());
//! let response = user_service.create_user(dto).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
