//! 인증요청관련 DTO
//!
//! 로그인/회원가입 요청 본문을 매핑합니다. 제약 조건은
//! `validation::schemas`의 `LOGIN_CREDENTIALS`, `SIGNUP_INPUT`에 선언되어 있으며,
//! 이 구조체들은 검증을 통과한 정규화 값에서만 만들어집니다.
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::user_dto::{UserDto, UserRole};

/// 로그인 요청 구조체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// 사용자명 또는 이메일
    pub identifier: String,
    pub secret: String,
}

/// 회원가입 요청 구조체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SignupRequest {
    /// 회원가입 계정은 항상 일반 사용자 역할로 시작
    pub fn into_user_dto(self) -> UserDto {
        UserDto {
            id: String::new(),
            username: self.username,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: UserRole::User,
            img_url: String::new(),
            jwt_token: String::new(),
            refresh_token: String::new(),
        }
    }
}
