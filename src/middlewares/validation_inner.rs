//! RequestValidator 검증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse};
use actix_web::error::PayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;
use serde_json::{json, Map, Value};

use crate::core::errors::{AppError, INTERNAL_SERVER_ERROR_MSG};
use crate::middlewares::upstream::{GateMode, UpstreamError};
use crate::middlewares::validated::{store_validated, PayloadSource};
use crate::middlewares::validation_middleware::ValidationRule;
use crate::validation::{IssueCode, ValidationIssues};

/// 실제 검증 로직을 수행하는 서비스
pub struct RequestValidatorService<S> {
    pub service: Rc<S>,
    pub(crate) rule: Rc<ValidationRule>,
}

impl<S, B> Service<ServiceRequest> for RequestValidatorService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let rule = self.rule.clone();

        Box::pin(async move {
            let upstream = req.extensions().get::<UpstreamError>().cloned();

            match (rule.gate, upstream) {
                (None, _) | (Some(GateMode::Corrected), None) => {}
                (Some(GateMode::Corrected), Some(UpstreamError::UserApi(err))) => {
                    log::debug!(
                        target: "validation",
                        "{}: upstream error {} forwarded",
                        rule.operation, err.code
                    );
                    return Ok(short_circuit(req, AppError::UserApi(err).error_response()));
                }
                (Some(GateMode::Corrected), Some(UpstreamError::Unrecognized(cause))) => {
                    log::error!(
                        target: "validation",
                        "{}: unrecognized upstream error: {}",
                        rule.operation, cause
                    );
                    return Ok(short_circuit(req, internal_error_response()));
                }
                (Some(GateMode::Legacy), Some(UpstreamError::UserApi(err))) => {
                    let response = AppError::UserApi(err).error_response();
                    // 응답은 이미 결정됨. 검증 결과는 기록만 함
                    match run_validation(&mut req, &rule).await {
                        Ok(_) => log::warn!(
                            target: "validation",
                            "{}: response already committed, valid payload discarded",
                            rule.operation
                        ),
                        Err(rejection) => log::warn!(
                            target: "validation",
                            "{}: response already committed, validation outcome {} discarded",
                            rule.operation,
                            rejection.status()
                        ),
                    }
                    return Ok(short_circuit(req, response));
                }
                (Some(GateMode::Legacy), upstream) => {
                    log::error!(
                        target: "validation",
                        "{}: legacy gate without recognized upstream error ({:?})",
                        rule.operation, upstream
                    );
                    return Ok(short_circuit(req, internal_error_response()));
                }
            }

            if let Err(rejection) = run_validation(&mut req, &rule).await {
                return Ok(short_circuit(req, rejection));
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 페이로드 추출, 검증, 정규화 값 저장까지 수행
async fn run_validation(
    req: &mut ServiceRequest,
    rule: &ValidationRule,
) -> Result<(), HttpResponse> {
    let input = read_payload(req, rule).await?;

    let normalized = match rule.validator.validate(rule.schema, &input).await {
        Ok(normalized) => normalized,
        Err(failure) => {
            let error = AppError::from(failure);
            if let AppError::SchemaViolation(issues) = &error {
                log::info!(
                    target: "validation",
                    "{}: rejected {} issue(s): {}",
                    rule.operation,
                    issues.len(),
                    issues
                );
            }
            return Err(error.error_response());
        }
    };

    if rule.source == PayloadSource::Body {
        let bytes = serde_json::to_vec(&normalized).map_err(|e| {
            AppError::InternalError(format!("normalized payload serialization failed: {}", e))
                .error_response()
        })?;
        req.set_payload(bytes_payload(web::Bytes::from(bytes)));
    }

    log::debug!(target: "validation", "{}: accepted", rule.operation);
    store_validated(req, rule.source, normalized);
    Ok(())
}

async fn read_payload(req: &mut ServiceRequest, rule: &ValidationRule) -> Result<Value, HttpResponse> {
    match rule.source {
        PayloadSource::PathParams => {
            let params: Map<String, Value> = req
                .match_info()
                .iter()
                .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
                .collect();
            Ok(Value::Object(params))
        }
        PayloadSource::Body => {
            // 앱 PayloadConfig 한도 초과도 같은 413 본문으로 응답
            let bytes = req.extract::<web::Bytes>().await.map_err(|e| {
                if e.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
                    log::info!(target: "validation", "{}: {}", rule.operation, e);
                    payload_too_large_response()
                } else {
                    e.error_response()
                }
            })?;

            if bytes.len() > rule.body_limit {
                log::info!(
                    target: "validation",
                    "{}: body of {} bytes exceeds limit {}",
                    rule.operation,
                    bytes.len(),
                    rule.body_limit
                );
                return Err(payload_too_large_response());
            }

            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Value::Object(Map::new()));
            }

            serde_json::from_slice(&bytes).map_err(|e| {
                log::info!(target: "validation", "{}: malformed JSON: {}", rule.operation, e);
                AppError::SchemaViolation(ValidationIssues::single(
                    "",
                    IssueCode::InvalidJson,
                    "Malformed JSON body",
                ))
                .error_response()
            })
        }
    }
}

/// 이미 소비한 본문 대신 정규화된 본문을 다시 설치
fn bytes_payload(bytes: web::Bytes) -> Payload {
    let stream = futures_util::stream::once(futures_util::future::ready(Ok::<_, PayloadError>(bytes)));
    Payload::Stream {
        payload: Box::pin(stream),
    }
}

fn payload_too_large_response() -> HttpResponse {
    HttpResponse::PayloadTooLarge().json(json!({ "msg": "Request body too large" }))
}

fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "msg": INTERNAL_SERVER_ERROR_MSG }))
}

fn short_circuit<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
