//! 설정 모듈
//!
//! 환경 변수 기반 설정 접근자를 제공합니다. `.env` 파일 로딩은 `main`에서
//! `PROFILE`에 따라 수행됩니다.

pub mod app_config;

pub use app_config::*;
