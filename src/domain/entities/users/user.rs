//! 사용자 엔티티
//!
//! 검증을 통과한 [`UserDto`]로부터 만들어지는 저장 단위입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::users::request::{UserDto, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub img_url: String,
    pub jwt_token: String,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID 는 항상 서버가 발급합니다. 토큰 필드는 클라이언트 값을 받지 않고
    /// 빈 문자열로 시작합니다.
    pub fn from_dto(dto: UserDto) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            username: dto.username,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            role: dto.role,
            img_url: dto.img_url,
            jwt_token: String::new(),
            refresh_token: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 클라이언트가 수정할 수 있는 필드만 반영
    pub fn apply_dto(&mut self, dto: UserDto) {
        self.username = dto.username;
        self.password = dto.password;
        self.first_name = dto.first_name;
        self.last_name = dto.last_name;
        self.email = dto.email;
        self.role = dto.role;
        self.img_url = dto.img_url;
        self.updated_at = Utc::now();
    }
}
