//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserDirectory`](user_repo::UserDirectory) 트레이트와 메모리 기반 구현을 제공합니다.
//! 검증 계층은 이 트레이트의 `get_all_users()`만 사용하여 사용자 ID 존재 여부를 확인합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserDirectory};
//!
//! let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserRepository::new());
//! let users = directory.get_all_users().await?;
//! ```

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserDirectory};
