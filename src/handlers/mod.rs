//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 입력 검증은 라우트에 적용된 `RequestValidator`가 먼저 수행하므로,
//! 핸들러는 검증을 통과한 값만 `ValidatedJson` / `ValidatedPath`로 받습니다.
//!
//! ```text
//! Client ─▶ RequestValidator ─▶ Handlers ─▶ UserService ─▶ UserDirectory
//!                  │ 400 / 500
//!                  ▼
//!               Client
//! ```
//!
//! 서비스 인스턴스는 `web::Data<UserService>`로 주입됩니다.

pub mod auth;
pub mod users;
