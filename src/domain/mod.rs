//! # Domain Layer Module
//!
//! 사용자 도메인의 엔티티와 DTO 를 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장되는 사용자 엔티티
//! └── dto       - 요청/응답 데이터 형태
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Repositories (UserDirectory)
//! ```

pub mod dto;
pub mod entities;
