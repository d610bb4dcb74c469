//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 레코드 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - 필수: 비어 있거나 공백만 있으면 `"Email field is required"`
//! - 형식: 이메일 주소 형식이 아니면 `"Enter a valid email address"`
//! - 필드가 없거나 `null`이면 빈 문자열로 간주하여 필수 규칙이 적용됨
//! - 중복 허용
//!
//! ### 사용자명 (`username`)
//! - 제약 없음, 앞뒤 공백만 제거 (`null`은 빈 문자열)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//!
//! let request: CreateUserRequest = serde_json::from_str(
//!     r#"{"username": "alice", "email": "alice@example.com"}"#,
//! )?;
//! request.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::user::validate_email_address;
use crate::utils::string_utils::deserialize_string_or_empty;

/// 새로운 사용자 레코드 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # 에러 응답 예제
///
/// ```json
/// {
///   "error": "Validation error: Enter a valid email address",
///   "message": "Enter a valid email address"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름 (중복 허용)
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub username: String,

    /// 사용자 이메일 주소
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
}
