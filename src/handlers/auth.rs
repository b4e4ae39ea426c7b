//! 인증 관련 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/auth/login` | 자격 증명 형식 확인 | 200 OK |
//! | `POST` | `/api/v1/auth/signup` | 회원가입 | 201 Created |

use actix_web::{web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginCredentials, SignupRequest};
use crate::domain::dto::users::response::LoginAcceptedResponse;
use crate::middlewares::ValidatedJson;
use crate::services::users::UserService;

/// 로그인 자격 증명 수신
///
/// 형식 검증을 통과한 자격 증명만 도달합니다. 실제 인증(비밀번호 대조,
/// 토큰 발급)은 이 서비스의 범위가 아니므로 수락 여부만 응답합니다.
pub async fn login(
    payload: ValidatedJson<LoginCredentials>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner();
    log::info!("로그인 자격 증명 수락: {}", credentials.identifier);

    Ok(HttpResponse::Ok().json(LoginAcceptedResponse::new(credentials.identifier)))
}

/// 회원가입
pub async fn signup(
    service: web::Data<UserService>,
    payload: ValidatedJson<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .create_user(payload.into_inner().into_user_dto())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
