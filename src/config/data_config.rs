//! 서버 및 저장소 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, 사용자 저장소 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT")
                .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string())),
        )
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 기본 로그 필터를 반환합니다.
    ///
    /// - Development/Test: `debug,actix_web=debug`
    /// - Staging/Production: `info,actix_web=debug`
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=debug",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    const DEFAULT_PER_SECOND: u64 = 100;
    const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패한 값은 에러 로그를 남기고 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    log::error!(
                        "RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용",
                        e,
                        Self::DEFAULT_PER_SECOND
                    );
                    Self::DEFAULT_PER_SECOND
                })
            })
            .unwrap_or(Self::DEFAULT_PER_SECOND);

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    log::error!(
                        "RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용",
                        e,
                        Self::DEFAULT_BURST_SIZE
                    );
                    Self::DEFAULT_BURST_SIZE
                })
            })
            .unwrap_or(Self::DEFAULT_BURST_SIZE);

        let config = Self {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: Self::DEFAULT_PER_SECOND,
            burst_size: Self::DEFAULT_BURST_SIZE,
        }
    }
}

/// 사용자 레코드 저장소 설정
///
/// 저장소 생성자에 명시적으로 전달됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// 저장소 맵의 초기 용량
    pub initial_capacity: usize,
}

impl StoreConfig {
    const DEFAULT_INITIAL_CAPACITY: usize = 64;

    /// 환경변수에서 저장소 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `USER_STORE_INITIAL_CAPACITY`: 초기 용량 (기본값: 64)
    pub fn from_env() -> Self {
        let initial_capacity = env::var("USER_STORE_INITIAL_CAPACITY")
            .ok()
            .and_then(|raw| match raw.parse::<usize>() {
                Ok(capacity) => Some(capacity),
                Err(e) => {
                    log::error!(
                        "USER_STORE_INITIAL_CAPACITY 파싱 실패: {}. 기본값 {} 사용",
                        e,
                        Self::DEFAULT_INITIAL_CAPACITY
                    );
                    None
                }
            })
            .unwrap_or(Self::DEFAULT_INITIAL_CAPACITY);

        Self { initial_capacity }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter_per_environment() {
        assert_eq!(
            Environment::Development.default_log_filter(),
            "debug,actix_web=debug"
        );
        assert_eq!(
            Environment::Production.default_log_filter(),
            "info,actix_web=debug"
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        let config = RateLimitConfig::default();

        assert_eq!(config.per_second, 100);
        assert_eq!(config.burst_size, 200);
    }

    #[test]
    fn test_store_config_defaults() {
        assert_eq!(StoreConfig::default().initial_capacity, 64);

        if env::var("USER_STORE_INITIAL_CAPACITY").is_err() {
            assert_eq!(StoreConfig::from_env(), StoreConfig::default());
        }
    }
}
