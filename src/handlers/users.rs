//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 정보 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! 경로의 `{id}`는 `RequestValidator::user_id_param`이 디렉터리에 존재함을
//! 확인한 뒤에만 핸들러에 도달합니다. 확인과 처리 사이에 삭제된 경우는
//! 서비스 계층의 404 로 응답합니다.

use actix_web::{web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{UserDto, UserIdParam};
use crate::middlewares::{ValidatedJson, ValidatedPath};
use crate::services::users::UserService;

pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 생성
///
/// 요청의 `id`, 토큰 필드는 무시되고 서버에서 새로 생성됩니다.
pub async fn create_user(
    service: web::Data<UserService>,
    payload: ValidatedJson<UserDto>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

pub async fn get_user(
    service: web::Data<UserService>,
    path: ValidatedPath<UserIdParam>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&path.id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 정보 수정
pub async fn update_user(
    service: web::Data<UserService>,
    path: ValidatedPath<UserIdParam>,
    payload: ValidatedJson<UserDto>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .update_user(&path.id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete_user(
    service: web::Data<UserService>,
    path: ValidatedPath<UserIdParam>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&path.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
