use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::UserRole;
use crate::domain::entities::users::User;

/// 표준 사용자 응답
///
/// 비밀번호와 서버 발급 토큰은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub img_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            first_name,
            last_name,
            email,
            role,
            img_url,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            username,
            first_name,
            last_name,
            email,
            role,
            img_url,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 요청이 검증 단계를 통과했음을 알리는 응답
///
/// 실제 인증은 이 서비스의 범위 밖이므로 토큰을 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginAcceptedResponse {
    pub identifier: String,
    pub status: String,
}

impl LoginAcceptedResponse {
    pub fn new(identifier: String) -> Self {
        Self {
            identifier,
            status: "credentials_accepted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::UserDto;
    use serde_json::json;

    #[test]
    fn test_user_response_hides_secrets() {
        let dto: UserDto = serde_json::from_value(json!({
            "username": "ada",
            "password": "secret1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }))
        .unwrap();
        let response = UserResponse::from(User::from_dto(dto));

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("jwtToken").is_none());
        assert!(value.get("refreshToken").is_none());
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["role"], "user");
    }
}
