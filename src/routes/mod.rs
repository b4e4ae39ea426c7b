//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 그룹화하고, 각 라우트 앞에 요청 검증 미들웨어를
//! 배치합니다.
//!
//! | 메서드 | 경로 | 검증 |
//! |--------|------|------|
//! | `GET` | `/health` | - |
//! | `POST` | `/api/v1/auth/login` | login credentials |
//! | `POST` | `/api/v1/auth/signup` | signup input |
//! | `GET` | `/api/v1/users` | - |
//! | `POST` | `/api/v1/users` | user dto (게이트) |
//! | `GET` | `/api/v1/users/{id}` | user id (게이트) |
//! | `PATCH` | `/api/v1/users/{id}` | user id → user dto (게이트) |
//! | `DELETE` | `/api/v1/users/{id}` | user id (게이트) |
//!
//! 같은 경로에 메서드별로 다른 미들웨어가 필요한 경우 guard 를 가진
//! resource 를 먼저 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserRepository::new());
//! let settings = RouteSettings::from_env();
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, directory.clone(), settings));
//! ```

use std::sync::Arc;

use actix_web::{guard, web};
use serde_json::json;

use crate::config::ValidationConfig;
use crate::handlers;
use crate::middlewares::{GateMode, RequestValidator, DEFAULT_BODY_LIMIT};
use crate::repositories::users::UserDirectory;
use crate::services::users::UserService;
use crate::validation::{DirectoryMembership, MembershipCheck};

/// 라우트 구성에 필요한 검증 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSettings {
    pub gate: GateMode,
    pub body_limit: usize,
}

impl RouteSettings {
    pub fn from_env() -> Self {
        Self {
            gate: ValidationConfig::gate_mode(),
            body_limit: ValidationConfig::json_body_limit(),
        }
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            gate: GateMode::Corrected,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

/// 모든 라우트를 설정합니다
///
/// `UserService`를 app data 로 등록하고, 사용자 ID 검증에는 같은
/// 디렉터리를 조회하는 `DirectoryMembership`을 사용합니다.
pub fn configure_all_routes(
    cfg: &mut web::ServiceConfig,
    directory: Arc<dyn UserDirectory>,
    settings: RouteSettings,
) {
    let membership: Arc<dyn MembershipCheck> =
        Arc::new(DirectoryMembership::new(directory.clone()));

    cfg.app_data(web::Data::new(UserService::new(directory)));

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg, settings);
    configure_user_routes(cfg, membership, settings);
}

/// 인증 관련 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"identifier":"ada","secret":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig, settings: RouteSettings) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(
                web::resource("/login")
                    .wrap(RequestValidator::login_credentials().with_body_limit(settings.body_limit))
                    .route(web::post().to(handlers::auth::login)),
            )
            .service(
                web::resource("/signup")
                    .wrap(RequestValidator::signup_input().with_body_limit(settings.body_limit))
                    .route(web::post().to(handlers::auth::signup)),
            ),
    );
}

/// 사용자 관련 라우트
///
/// `/{id}` 라우트는 모두 ID 멤버십 검증을 거치며, PATCH 는 그 뒤에 본문
/// 검증을 추가로 거칩니다. `.wrap()`은 마지막에 등록한 것이 먼저 실행됩니다.
fn configure_user_routes(
    cfg: &mut web::ServiceConfig,
    membership: Arc<dyn MembershipCheck>,
    settings: RouteSettings,
) {
    let user_dto = || RequestValidator::user_dto(settings.gate).with_body_limit(settings.body_limit);
    let user_id = || RequestValidator::user_id_param(membership.clone(), settings.gate);

    cfg.service(
        web::scope("/api/v1/users")
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(user_dto())
                    .route(web::post().to(handlers::users::create_user)),
            )
            .service(web::resource("").route(web::get().to(handlers::users::list_users)))
            .service(
                web::resource("/{id}")
                    .guard(guard::Patch())
                    .wrap(user_dto())
                    .wrap(user_id())
                    .route(web::patch().to(handlers::users::update_user)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Any(guard::Get()).or(guard::Delete()))
                    .wrap(user_id())
                    .route(web::get().to(handlers::users::get_user))
                    .route(web::delete().to(handlers::users::delete_user)),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_request_guard",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
