//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 형태를 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 검증과 형태의 분리
//! - 제약 조건은 `validation::schemas`에 설정으로 선언
//! - DTO 는 검증을 통과한 정규화 값의 타입 표현만 담당
//! - 기본값(`role = user` 등)은 검증 단계에서 채워지므로 DTO 는 항상 완전한 값
//!
//! ### 2. 내부 표현과 외부 표현의 분리
//! - `User` 엔티티와 `UserResponse`를 구분하여 비밀번호/토큰 노출 방지
//! - JSON 필드명은 camelCase (`firstName`, `imgUrl`)
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/        # 요청 DTO (클라이언트 → 서버)
//!     │   ├── auth_request.rs   LoginCredentials, SignupRequest
//!     │   ├── user_dto.rs       UserDto, UserRole
//!     │   └── user_id_param.rs  UserIdParam
//!     └── response/       # 응답 DTO (서버 → 클라이언트)
//!         └── user_response.rs
//! ```

pub mod users;

pub use users::*;
