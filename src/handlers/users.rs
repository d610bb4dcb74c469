//! # User Management HTTP Handlers
//!
//! 사용자 레코드 CRUD를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 사용자 목록 (`?email=` 필터) | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! 서비스는 `web::Data<UserService>`로 주입됩니다.
//!
//! ## 검증 실패 응답
//!
//! ```json
//! {
//!   "error": "Validation error: Email field is required",
//!   "message": "Email field is required"
//! }
//! ```

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest, UserListQuery};
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "user": {
///     "id": "0d6c3a9e-6a7b-4a44-9a55-3f1f1a0f5b2c",
///     "username": "alice",
///     "email": "alice@example.com",
///     "email_confirmed": false,
///     "concurrency_stamp": "b7f1...",
///     "created_at": "2024-01-01T00:00:00Z",
///     "updated_at": "2024-01-01T00:00:00Z"
///   },
///   "message": "사용자가 성공적으로 생성되었습니다"
/// }
/// ```
///
/// ## 실패 (400 Bad Request)
/// - 이메일 누락: `"Email field is required"`
/// - 이메일 형식 오류: `"Enter a valid email address"`
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"username": "alice", "email": "alice@example.com"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate().map_err(AppError::from)?;

    let response = service.create_user(payload.into_inner())?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// `GET /users?email=alice@example.com` 처럼 이메일로 필터링할 수 있습니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users(query.email.as_deref())?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// ## 실패 (404 Not Found)
/// 발급된 적 없는 ID, 삭제된 ID, UUID 형식이 아닌 ID
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "alice@new.example.com",
///   "concurrency_stamp": "b7f1..."
/// }
/// ```
///
/// ## 실패 사례
/// - 400: 이메일 검증 실패 (기존 레코드는 변경되지 않음)
/// - 404: 사용자 없음
/// - 409: `concurrency_stamp`가 현재 값과 다름
#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(AppError::from)?;

    let user = service.update_user(&user_id, payload.into_inner())?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제(Hard Delete)이며, 복구가 불가능합니다.
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/users/0d6c3a9e-6a7b-4a44-9a55-3f1f1a0f5b2c
/// ```
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id)?;

    Ok(HttpResponse::NoContent().finish())
}
