//! 사용자/인증 API 요청 검증 서비스
//!
//! 로그인, 회원가입, 사용자 CRUD 요청이 핸들러에 도달하기 전에 입력을
//! 스키마로 검증하는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **선언적 스키마**: 필드 규칙을 데이터로 선언하고 하나의 엔진이 해석
//! - **요청 검증 미들웨어**: 위반 시 필드별 issue 목록과 함께 400 응답
//! - **멤버십 검증**: 경로의 사용자 ID 가 디렉터리에 존재하는지 비동기 확인
//! - **게이트 모드**: 앞선 단계의 에러를 먼저 응답 (`corrected` / `legacy`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RequestValidator│ ← 스키마 검증 (validation)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자 디렉터리 (in-memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_request_guard::validation::{schemas::USER_DTO, Validator};
//!
//! let normalized = Validator::new().validate(&USER_DTO, &input).await?;
//! assert_eq!(normalized["role"], "user");
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;
