//! # 사용자 DTO
//!
//! 사용자 생성/수정 요청에서 주고받는 데이터 형태입니다.
//!
//! ## 검증 규칙 (`validation::schemas::USER_DTO`)
//!
//! | 필드 | 규칙 | 기본값 |
//! |------|------|--------|
//! | `id` | - | `""` |
//! | `username` | 필수, 2-50자 | |
//! | `password` | 필수, 6자 이상 | |
//! | `firstName` / `lastName` | 필수, 2-50자 | |
//! | `email` | 필수, `local@domain.tld` 형태 | |
//! | `role` | `admin` 또는 `user` | `user` |
//! | `imgUrl` | 비어 있지 않으면 절대 URL | `""` |
//! | `jwtToken` / `refreshToken` | 서버 발급 | `""` |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "ada",
//!   "password": "secret1",
//!   "firstName": "Ada",
//!   "lastName": "Lovelace",
//!   "email": "ada@example.com"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub jwt_token: String,
    #[serde(default)]
    pub refresh_token: String,
}
