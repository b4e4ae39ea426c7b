//! 핵심 공통 모듈
//!
//! 애플리케이션 전역에서 공유하는 에러 타입과 결과 타입을 제공합니다.

pub mod errors;

pub use errors::*;
