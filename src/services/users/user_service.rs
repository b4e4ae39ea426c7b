//! # 사용자 관리 서비스 구현
//!
//! 검증을 통과한 DTO 를 받아 사용자 저장소에 반영하고 응답 DTO 로 변환합니다.
//!
//! ```text
//! ┌──────────────────────┐
//! │ RequestValidator     │ ← 스키마 검증 (미들웨어)
//! └──────────────────────┘
//!            │ ValidatedJson<UserDto> / ValidatedPath<UserIdParam>
//!            ▼
//! ┌──────────────────────┐
//! │ UserService          │ ← 엔티티 생성, 응답 변환
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │ dyn UserDirectory    │ ← 외부 협력자
//! └──────────────────────┘
//! ```
//!
//! 경로 파라미터 검증과 핸들러 실행 사이에 다른 요청이 사용자를 삭제할 수
//! 있으므로, ID 기반 작업은 부재 시 `NotFound`를 반환합니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::UserDto,
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::User,
    },
    repositories::users::UserDirectory,
};

#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl UserService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn create_user(&self, dto: UserDto) -> AppResult<CreateUserResponse> {
        let created = self.directory.create(User::from_dto(dto)).await?;
        log::info!("사용자 생성: {} ({})", created.username, created.id);

        Ok(CreateUserResponse {
            user: UserResponse::from(created),
            message: "User created successfully".to_string(),
        })
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.directory.get_all_users().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .directory
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn update_user(&self, id: &str, dto: UserDto) -> AppResult<UserResponse> {
        let mut user = self
            .directory
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user.apply_dto(dto);

        let updated = self
            .directory
            .update(user)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        log::info!("사용자 수정: {}", updated.id);
        Ok(UserResponse::from(updated))
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.directory.delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::info!("사용자 삭제: {}", id);
        Ok(())
    }
}
