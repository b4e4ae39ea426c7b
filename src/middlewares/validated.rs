//! 검증 통과 값 추출자
//!
//! `RequestValidator`는 검증을 통과한 정규화 값을 요청 extension 에 저장합니다.
//! 핸들러는 `ValidatedJson<T>` / `ValidatedPath<T>`로 이 값을 타입으로 받습니다.
//! 미들웨어가 적용되지 않은 라우트에서 사용하면 500 으로 응답합니다.

use std::fmt;
use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 검증 대상 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    Body,
    PathParams,
}

impl fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSource::Body => write!(f, "body"),
            PayloadSource::PathParams => write!(f, "path"),
        }
    }
}

/// 요청 하나에서 검증된 값 보관소
#[derive(Debug, Clone, Default)]
pub struct ValidatedPayloads {
    body: Option<Value>,
    path: Option<Value>,
}

impl ValidatedPayloads {
    pub fn get(&self, source: PayloadSource) -> Option<&Value> {
        match source {
            PayloadSource::Body => self.body.as_ref(),
            PayloadSource::PathParams => self.path.as_ref(),
        }
    }

    pub fn set(&mut self, source: PayloadSource, value: Value) {
        match source {
            PayloadSource::Body => self.body = Some(value),
            PayloadSource::PathParams => self.path = Some(value),
        }
    }
}

pub(crate) fn store_validated<M: HttpMessage>(message: &M, source: PayloadSource, value: Value) {
    let mut extensions = message.extensions_mut();
    match extensions.get_mut::<ValidatedPayloads>() {
        Some(payloads) => payloads.set(source, value),
        None => {
            let mut payloads = ValidatedPayloads::default();
            payloads.set(source, value);
            extensions.insert(payloads);
        }
    }
}

fn take_validated<T: DeserializeOwned>(req: &HttpRequest, source: PayloadSource) -> AppResult<T> {
    let value = req
        .extensions()
        .get::<ValidatedPayloads>()
        .and_then(|payloads| payloads.get(source).cloned())
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "no validated {} payload on request; route is missing RequestValidator",
                source
            ))
        })?;

    serde_json::from_value(value).context("validated payload does not match handler type")
}

/// 검증된 JSON 본문
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for ValidatedJson<T> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(take_validated(req, PayloadSource::Body).map(ValidatedJson))
    }
}

/// 검증된 경로 파라미터
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

impl<T> ValidatedPath<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedPath<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for ValidatedPath<T> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(take_validated(req, PayloadSource::PathParams).map(ValidatedPath))
    }
}
