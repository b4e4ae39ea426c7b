//! 식별자 존재 여부 확인 기능
//!
//! `UserIdParam` 스키마는 값이 현재 알려진 사용자 ID 인지 확인해야 합니다.
//! 이 확인은 특정 저장소에 묶이지 않도록 `MembershipCheck` 로 주입됩니다.
//! 조회 결과는 시점 스냅샷이며, 동시에 진행 중인 생성/삭제와 경합할 수 있습니다.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::AppResult;
use crate::repositories::users::UserDirectory;

#[async_trait]
pub trait MembershipCheck: Send + Sync {
    /// `id`가 현재 알려진 식별자인지 확인
    async fn is_known(&self, id: &str) -> AppResult<bool>;
}

/// `UserDirectory::get_all_users()` 결과로 존재 여부를 판단하는 어댑터
pub struct DirectoryMembership {
    directory: Arc<dyn UserDirectory>,
}

impl DirectoryMembership {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl MembershipCheck for DirectoryMembership {
    async fn is_known(&self, id: &str) -> AppResult<bool> {
        let users = self.directory.get_all_users().await?;
        Ok(users.iter().any(|user| user.id == id))
    }
}

/// 고정된 식별자 집합
#[async_trait]
impl MembershipCheck for HashSet<String> {
    async fn is_known(&self, id: &str) -> AppResult<bool> {
        Ok(self.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::UserDto;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::InMemoryUserRepository;

    fn sample_dto(username: &str) -> UserDto {
        serde_json::from_value(serde_json::json!({
            "username": username,
            "password": "secret1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": format!("{}@example.com", username),
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_directory_membership_reflects_current_users() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let created = repo.create(User::from_dto(sample_dto("ada"))).await.unwrap();
        let membership = DirectoryMembership::new(repo.clone());

        assert!(membership.is_known(&created.id).await.unwrap());
        assert!(!membership.is_known("missing").await.unwrap());

        repo.delete(&created.id).await.unwrap();
        assert!(!membership.is_known(&created.id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_fixed_set_membership() {
        let known: HashSet<String> = ["u1", "u2"].iter().map(|s| s.to_string()).collect();

        assert!(known.is_known("u1").await.unwrap());
        assert!(!known.is_known("u3").await.unwrap());
    }
}
