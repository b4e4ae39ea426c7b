//! 미들웨어 모듈
//!
//! 요청이 핸들러에 도달하기 전에 입력을 검증하는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 요청 검증 미들웨어 (RequestValidator)
//! - 본문 또는 경로 파라미터를 스키마로 검증
//! - 위반 시 400 과 함께 필드별 issue 목록 응답
//! - 통과 시 정규화된 값을 request extension 에 저장하고 본문을 교체
//! - 게이트 모드: 앞선 단계가 기록한 에러(`UpstreamError`)를 먼저 처리
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::{GateMode, RequestValidator, ValidatedJson};
//!
//! web::resource("/users/{id}")
//!     // 마지막 wrap 이 먼저 실행됨: id 검증 후 본문 검증
//!     .wrap(RequestValidator::user_dto(GateMode::Corrected))
//!     .wrap(RequestValidator::user_id_param(membership, GateMode::Corrected))
//!     .route(web::patch().to(update_user))
//! ```

pub mod upstream;
pub mod validated;
pub mod validation_middleware;
mod validation_inner;

// 미들웨어 재export
pub use upstream::{GateMode, RecordUpstreamError, UpstreamError};
pub use validated::{PayloadSource, ValidatedJson, ValidatedPath, ValidatedPayloads};
pub use validation_middleware::{RequestValidator, DEFAULT_BODY_LIMIT};
