//! User Entity Implementation
//!
//! 사용자 신원 레코드의 핵심 구현체입니다.
//! 외부 신원 프레임워크의 기본 타입을 상속하지 않고,
//! 필요한 필드(id, username, email 등)를 직접 선언하는 컴포지션 방식입니다.
//!
//! 이메일 검증 규칙도 이 모듈에 있습니다. 요청 DTO와 저장소가 같은 규칙을 공유하므로
//! 웹 계층과 저장소 계층의 검증 메시지가 항상 일치합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{ValidateEmail, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{is_valid_string, trim_string};

/// 이메일이 비어 있을 때 호출자에게 노출되는 메시지
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email field is required";

/// 이메일 형식이 잘못되었을 때 호출자에게 노출되는 메시지
pub const EMAIL_INVALID_MESSAGE: &str = "Enter a valid email address";

/// 이메일 주소를 검증하는 함수
///
/// 필수 검증이 먼저 수행되므로 빈 값에는 "required" 메시지 하나만 반환됩니다.
/// 공백만 있는 값도 빈 값으로 취급합니다.
///
/// # 에러 코드
///
/// - `required`: 빈 문자열 또는 공백만 있는 문자열
/// - `email`: 이메일 형식이 아님
///
/// # 예제
///
/// ```rust,ignore
/// assert!(validate_email_address("alice@example.com").is_ok());
/// assert!(validate_email_address("").is_err());          // Email field is required
/// assert!(validate_email_address("not-an-email").is_err()); // Enter a valid email address
/// ```
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !is_valid_string(email) {
        return Err(ValidationError::new("required")
            .with_message(EMAIL_REQUIRED_MESSAGE.into()));
    }

    if !email.trim().validate_email() {
        return Err(ValidationError::new("email")
            .with_message(EMAIL_INVALID_MESSAGE.into()));
    }

    Ok(())
}

/// 검증을 통과한 이메일을 저장 형태(앞뒤 공백 제거)로 반환합니다.
pub fn checked_email(email: &str) -> AppResult<String> {
    validate_email_address(email).map_err(AppError::from)?;
    Ok(trim_string(email))
}

/// 조회용 정규화 키 (대문자 변환)
pub fn normalize_key(value: &str) -> String {
    value.to_uppercase()
}

/// 사용자 엔티티
///
/// 저장된 모든 레코드는 비어 있지 않고 형식이 올바른 `email`을 가집니다.
/// 이 불변식은 [`User::new`]와 [`UserChanges`] 적용 시점에 검증됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 생성 시 할당되는 고유 ID (변경 불가)
    pub id: Uuid,
    /// 사용자 이름 (중복 허용)
    pub username: String,
    /// 대소문자 무관 조회용 사용자 이름
    pub normalized_username: String,
    /// 사용자 이메일 (필수, 중복 허용)
    pub email: String,
    /// 대소문자 무관 조회용 이메일
    pub normalized_email: String,
    /// 이메일 인증 여부
    pub email_confirmed: bool,
    /// 쓰기마다 새로 발급되는 동시성 스탬프
    pub concurrency_stamp: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이메일 검증에 실패하면 `AppError::ValidationError`를 반환합니다.
    /// ID 할당은 호출자(저장소)의 책임입니다.
    pub fn new(id: Uuid, username: &str, email: &str) -> AppResult<Self> {
        let email = checked_email(email)?;
        let username = trim_string(username);
        let now = Utc::now();

        Ok(Self {
            id,
            normalized_username: normalize_key(&username),
            username,
            normalized_email: normalize_key(&email),
            email,
            email_confirmed: false,
            concurrency_stamp: new_concurrency_stamp(),
            created_at: now,
            updated_at: now,
        })
    }

    /// 정규화된 이메일이 주어진 값과 일치하는지 확인
    pub fn has_email(&self, email: &str) -> bool {
        self.normalized_email == normalize_key(email.trim())
    }

    /// 변경 사항을 적용한 새 레코드를 반환합니다.
    ///
    /// `self`는 변경하지 않습니다. 검증에 실패하면 아무것도 적용되지 않은 채
    /// 에러가 반환되므로, 호출자는 성공한 결과만 저장하면 됩니다.
    /// 적용할 필드가 없으면 스탬프와 수정 시간도 그대로 둡니다.
    pub fn with_changes(&self, changes: &UserChanges) -> AppResult<Self> {
        let mut updated = self.clone();

        if let Some(email) = &changes.email {
            let email = checked_email(email)?;
            updated.normalized_email = normalize_key(&email);
            updated.email = email;
        }

        if let Some(username) = &changes.username {
            let username = trim_string(username);
            updated.normalized_username = normalize_key(&username);
            updated.username = username;
        }

        if changes.touches_fields() {
            updated.concurrency_stamp = new_concurrency_stamp();
            updated.updated_at = Utc::now();
        }

        Ok(updated)
    }
}

/// 부분 수정 요청
///
/// `None` 필드는 변경하지 않습니다.
/// `concurrency_stamp`가 주어지면 현재 레코드의 스탬프와 일치해야 합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub concurrency_stamp: Option<String>,
}

impl UserChanges {
    /// 레코드 필드를 바꾸는 변경이 있는지 확인
    pub fn touches_fields(&self) -> bool {
        self.username.is_some() || self.email.is_some()
    }
}

fn new_concurrency_stamp() -> String {
    Uuid::new_v4().to_string()
}
