//! 요청 검증 미들웨어
//!
//! 라우트(resource) 단위로 `.wrap()` 하여 본문 또는 경로 파라미터를 스키마로
//! 검증합니다. 통과한 요청만 핸들러에 도달하며, 정규화된 값(기본값 적용,
//! 미정의 키 제거)이 extension 과 본문에 다시 실립니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::upstream::GateMode;
use crate::middlewares::validated::PayloadSource;
use crate::middlewares::validation_inner::RequestValidatorService;
use crate::validation::schemas::{LOGIN_CREDENTIALS, SIGNUP_INPUT, USER_DTO, USER_ID_PARAM};
use crate::validation::{MembershipCheck, Schema, Validator};

/// 기본 본문 크기 제한 (64 KiB)
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// 검증 단계 하나의 구성
#[derive(Clone)]
pub(crate) struct ValidationRule {
    pub operation: &'static str,
    pub schema: &'static Schema,
    pub source: PayloadSource,
    /// `None`이면 상위 에러를 보지 않고 바로 검증
    pub gate: Option<GateMode>,
    pub validator: Validator,
    pub body_limit: usize,
}

/// 스키마 기반 요청 검증 미들웨어
#[derive(Clone)]
pub struct RequestValidator {
    rule: ValidationRule,
}

impl RequestValidator {
    pub fn new(
        operation: &'static str,
        schema: &'static Schema,
        source: PayloadSource,
        gate: Option<GateMode>,
        validator: Validator,
    ) -> Self {
        Self {
            rule: ValidationRule {
                operation,
                schema,
                source,
                gate,
                validator,
                body_limit: DEFAULT_BODY_LIMIT,
            },
        }
    }

    /// 로그인 자격 증명 본문 검증
    pub fn login_credentials() -> Self {
        Self::new(
            "validate_login_credentials",
            &LOGIN_CREDENTIALS,
            PayloadSource::Body,
            None,
            Validator::new(),
        )
    }

    /// 회원가입 본문 검증
    pub fn signup_input() -> Self {
        Self::new(
            "validate_signup_input",
            &SIGNUP_INPUT,
            PayloadSource::Body,
            None,
            Validator::new(),
        )
    }

    /// 사용자 DTO 본문 검증 (게이트 적용)
    pub fn user_dto(gate: GateMode) -> Self {
        Self::new(
            "validate_user_dto",
            &USER_DTO,
            PayloadSource::Body,
            Some(gate),
            Validator::new(),
        )
    }

    /// 경로의 사용자 ID 가 디렉터리에 존재하는지 검증 (게이트 적용)
    pub fn user_id_param(membership: Arc<dyn MembershipCheck>, gate: GateMode) -> Self {
        Self::new(
            "validate_user_id_param",
            &USER_ID_PARAM,
            PayloadSource::PathParams,
            Some(gate),
            Validator::with_membership(membership),
        )
    }

    /// 본문 크기 제한 변경
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.rule.body_limit = limit;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestValidator
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequestValidatorService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestValidatorService {
            service: Rc::new(service),
            rule: Rc::new(self.rule.clone()),
        }))
    }
}
