//! # Application Error Handling System
//!
//! 사용자 레코드 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 반환된 에러가 자동으로 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 이메일 누락, 형식 오류 |
//! | `NotFound` | 404 Not Found | 존재하지 않거나 삭제된 사용자 ID |
//! | `ConflictError` | 409 Conflict | 동시성 스탬프 불일치 |
//! | `InternalError` | 500 Internal Server Error | 저장소 잠금 오염 등 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation error: Enter a valid email address",
//!   "message": "Enter a valid email address"
//! }
//! ```
//!
//! `message`는 호출자에게 그대로 노출해도 되는 문구만 담습니다.
//! 웹 계층은 이 값을 폼 검증 메시지로 바로 표시할 수 있습니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 호출자가 복구할 수 있는 실패입니다.
/// 저장소 계층은 어떤 실패도 삼키지 않고 이 타입으로 반환합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락이나 형식 오류로 쓰기가 거부되었을 때 발생합니다.
    /// 호출자가 입력을 고쳐 다시 시도할 수 있습니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// // 빈 이메일
    /// store.create("bob", "")
    /// // => Err(AppError::ValidationError("Email field is required"))
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 발급된 적 없는 ID이거나 이미 삭제된 ID로 접근했을 때 발생합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌 에러
    ///
    /// 수정 요청의 동시성 스탬프가 현재 레코드와 다를 때 발생합니다.
    /// 다른 요청이 먼저 레코드를 바꾼 경우이므로 최신 값을 다시 읽어야 합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    ///
    /// 잠금 오염처럼 호출자 입력과 무관한 시스템 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 호출자에게 노출할 메시지를 반환합니다.
    ///
    /// `Display` 구현과 달리 분류 접두어("Validation error: " 등)가 붙지 않습니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기고, 클라이언트에는 같은 JSON 형식으로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if let AppError::InternalError(msg) = self {
            log::error!("내부 오류 응답: {}", msg);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string(),
                "message": self.message(),
            }))
    }
}

/// 단일 필드 검증 실패를 `AppError::ValidationError`로 변환합니다.
///
/// 커스텀 검증 함수가 붙인 메시지를 그대로 사용하고,
/// 메시지가 없으면 에러 코드를 사용합니다.
impl From<validator::ValidationError> for AppError {
    fn from(error: validator::ValidationError) -> Self {
        let message = error
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| error.code.into_owned());

        AppError::ValidationError(message)
    }
}

/// DTO 수준 검증 실패를 `AppError::ValidationError`로 변환합니다.
///
/// 첫 번째 필드 에러의 메시지를 사용합니다.
/// 요청 DTO는 검증 대상 필드가 하나뿐이라 순서가 결과에 영향을 주지 않습니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        errors
            .field_errors()
            .into_values()
            .flat_map(|field_errors| field_errors.iter())
            .next()
            .cloned()
            .map(AppError::from)
            .unwrap_or_else(|| AppError::ValidationError(errors.to_string()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let records = self.records.read().context("사용자 저장소 읽기 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email field is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("stale stamp".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_has_no_category_prefix() {
        let error = AppError::ValidationError("Enter a valid email address".to_string());

        assert_eq!(error.message(), "Enter a valid email address");
        assert_eq!(error.to_string(), "Validation error: Enter a valid email address");
    }

    #[test]
    fn test_from_validation_error_uses_message() {
        let error = validator::ValidationError::new("email")
            .with_message("Enter a valid email address".into());

        assert_eq!(
            AppError::from(error),
            AppError::ValidationError("Enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_from_validation_error_falls_back_to_code() {
        let error = validator::ValidationError::new("required");

        assert_eq!(
            AppError::from(error),
            AppError::ValidationError("required".to_string())
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
