//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장되는 사용자 엔티티)
//! └── dto/          ← 클라이언트와 주고받는 데이터 형태
//! ```
//!
//! 엔티티는 검증을 통과한 DTO 로부터만 생성됩니다. 검증 계층을 거치지 않은
//! 입력이 저장소에 닿지 않도록 생성 경로를 `User::from_dto` 하나로 제한합니다.

pub mod users;
