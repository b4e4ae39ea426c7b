//! 서버 및 검증 설정 관리 모듈
//!
//! 환경 변수에서 서버, 검증 게이트, Rate Limiting, CORS 설정을 읽습니다.
//! 값이 없거나 잘못된 경우 기본값을 사용하고 로그를 남깁니다.

use std::env;

use log::error;

use crate::middlewares::GateMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }
}

pub struct ValidationConfig;

impl ValidationConfig {
    /// `VALIDATION_GATE_MODE` = `corrected` (기본) | `legacy`
    pub fn gate_mode() -> GateMode {
        match env::var("VALIDATION_GATE_MODE") {
            Ok(value) => GateMode::parse(&value).unwrap_or_else(|| {
                error!("VALIDATION_GATE_MODE 값 '{}' 인식 불가. corrected 사용", value);
                GateMode::Corrected
            }),
            Err(_) => GateMode::Corrected,
        }
    }

    /// 검증 대상 JSON 본문의 최대 크기 (bytes)
    pub fn json_body_limit() -> usize {
        env::var("JSON_BODY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64 * 1024)
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// 쉼표로 구분된 `CORS_ALLOWED_ORIGINS`
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());
        Self::parse_origins(&raw)
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_gate_mode_default() {
        if env::var("VALIDATION_GATE_MODE").is_err() {
            assert_eq!(ValidationConfig::gate_mode(), GateMode::Corrected);
        }
    }

    #[test]
    fn test_parse_origins() {
        let origins = CorsConfig::parse_origins(" http://a.test , ,http://b.test");

        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
