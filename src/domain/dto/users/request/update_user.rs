//! # 사용자 수정/조회 요청 DTO
//!
//! 부분 수정(`PATCH`)과 목록 조회 쿼리에 사용되는 데이터 구조입니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};
use crate::domain::entities::users::user::{validate_email_address, UserChanges};
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 부분 수정 요청 DTO
///
/// 누락된 필드는 변경하지 않습니다.
///
/// - `username`: 빈 문자열이나 공백만 있으면 "변경 없음"으로 처리
/// - `email`: 값이 주어지면 빈 문자열도 그대로 검증 대상 (필수 규칙 적용)
/// - `concurrency_stamp`: 마지막으로 읽은 스탬프. 주어지면 현재 값과 일치해야 함
///
/// ```json
/// {
///   "email": "alice@new.example.com",
///   "concurrency_stamp": "5f0c1a3e-0f4b-4d3a-9a57-1c7e6a1f2b9d"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub concurrency_stamp: Option<String>,
}

// Option 필드라 derive 대신 직접 구현: 값이 있을 때만 이메일 규칙 적용
impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(email) = &self.email {
            if let Err(error) = validate_email_address(email) {
                errors.add("email", error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            concurrency_stamp: request.concurrency_stamp,
        }
    }
}

/// 사용자 목록 조회 쿼리
///
/// `GET /api/v1/users?email=alice@example.com`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    /// 대소문자 무관 이메일 필터
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}
