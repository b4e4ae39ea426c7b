//! 사용자 저장소
//!
//! 검증 계층이 읽는 외부 협력자입니다. `UserDirectory` 트레이트로 추상화되어
//! 있으며, 기본 구현인 [`InMemoryUserRepository`]는 프로세스 메모리에
//! 사용자를 보관합니다. 영속 저장소는 같은 트레이트를 구현하여 교체할 수 있습니다.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 전체 사용자 목록 (생성 순)
    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자명/이메일 중복 시 `ConflictError`
    async fn create(&self, user: User) -> AppResult<User>;

    /// 없는 ID 이면 `Ok(None)`
    async fn update(&self, user: User) -> AppResult<Option<User>>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::DirectoryError("user store lock poisoned".to_string())
    }

    fn ensure_unique(users: &[User], candidate: &User) -> AppResult<()> {
        let others = users.iter().filter(|u| u.id != candidate.id);

        for user in others {
            if user.username == candidate.username {
                return Err(AppError::ConflictError("username already in use".to_string()));
            }
            if user.email == candidate.email {
                return Err(AppError::ConflictError("email already in use".to_string()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserRepository {
    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        Self::ensure_unique(&users, &user)?;

        users.push(user.clone());
        log::debug!("사용자 저장: {} ({})", user.username, user.id);
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        Self::ensure_unique(&users, &user)?;

        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::UserDto;
    use serde_json::json;

    fn user(username: &str, email: &str) -> User {
        let dto: UserDto = serde_json::from_value(json!({
            "username": username,
            "password": "secret1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": email,
        }))
        .unwrap();
        User::from_dto(dto)
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("ada", "ada@example.com")).await.unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(repo.get_all_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_username_or_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("ada", "ada@example.com")).await.unwrap();

        let same_name = repo.create(user("ada", "other@example.com")).await;
        let same_email = repo.create(user("grace", "ada@example.com")).await;

        assert!(matches!(same_name, Err(AppError::ConflictError(_))));
        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_replaces_existing_only() {
        let repo = InMemoryUserRepository::new();
        let mut created = repo.create(user("ada", "ada@example.com")).await.unwrap();
        created.first_name = "Augusta".to_string();

        let updated = repo.update(created.clone()).await.unwrap();
        assert_eq!(updated.map(|u| u.first_name), Some("Augusta".to_string()));

        let missing = repo.update(user("grace", "grace@example.com")).await.unwrap();
        assert!(missing.is_none());
    }

    #[actix_web::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("ada", "ada@example.com")).await.unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert!(repo.get_all_users().await.unwrap().is_empty());
    }
}
