//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 전체 생명주기를 관리하는 애플리케이션 계층입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               UserService                │
//! │ • 문자열 ID 파싱                          │
//! │ • Request DTO → 저장소 호출               │
//! │ • Entity → Response DTO                  │
//! │ • 변경 작업 로깅                          │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │             UserRecordStore              │
//! │ • 쓰기 시 이메일 검증                      │
//! │ • RwLock 기반 직렬화                      │
//! └──────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use log::{info, warn};
use uuid::Uuid;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::user::UserChanges,
    },
    repositories::users::user_repo::UserRecordStore,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소는 생성자로 주입됩니다. 여러 워커가 같은 저장소를 공유하도록
/// `Arc`로 받습니다.
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 이메일 검증 실패 (저장소에서 발생)
/// - **NotFound**: 없는 ID, 삭제된 ID, UUID 형식이 아닌 ID
/// - **ConflictError**: 동시성 스탬프 불일치
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<UserRecordStore>,
}

impl UserService {
    pub fn new(store: Arc<UserRecordStore>) -> Self {
        Self { store }
    }

    /// 새 사용자 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 생성된 사용자 정보와 성공 메시지
    /// * `Err(AppError::ValidationError)` - 이메일 누락 또는 형식 오류
    ///
    /// ```rust,ignore
    /// let response = user_service.create_user(CreateUserRequest {
    ///     username: "alice".to_string(),
    ///     email: "alice@example.com".to_string(),
    /// })?;
    /// println!("새 사용자 ID: {}", response.user.id);
    /// ```
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let user = self
            .store
            .create(&request.username, &request.email)
            .inspect_err(|e| warn!("사용자 생성 거부: {}", e))?;

        info!("사용자 생성 완료: id={}", user.id);

        Ok(CreateUserResponse {
            user: UserResponse::from(user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let id = parse_user_id(id)?;
        let user = self.store.get(&id)?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 부분 수정
    ///
    /// 이메일이 포함되면 적용 전에 다시 검증하며, 실패 시 기존 레코드는 그대로 유지됩니다.
    pub fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let id = parse_user_id(id)?;
        let changes = UserChanges::from(request);

        let user = self
            .store
            .update(&id, &changes)
            .inspect_err(|e| warn!("사용자 수정 거부: id={}, {}", id, e))?;

        info!("사용자 수정 완료: id={}", id);
        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    ///
    /// 물리적 삭제이며 같은 ID는 다시 조회할 수 없습니다.
    pub fn delete_user(&self, id: &str) -> AppResult<()> {
        let id = parse_user_id(id)?;
        self.store.delete(&id)?;

        info!("사용자 삭제 완료: id={}", id);
        Ok(())
    }

    /// 사용자 목록 조회
    ///
    /// `email`이 주어지면 대소문자 무관 일치 레코드만 반환합니다.
    pub fn list_users(&self, email: Option<&str>) -> AppResult<Vec<UserResponse>> {
        let users = match email {
            Some(email) => self.store.find_by_email(email)?,
            None => self.store.list()?,
        };

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

// UUID가 아닌 문자열은 발급된 적 없는 ID이므로 NotFound로 취급
fn parse_user_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id.trim())
        .map_err(|_| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
}
