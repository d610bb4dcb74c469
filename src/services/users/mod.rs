//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 생성, 조회, 수정, 삭제, 목록 조회를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let request = CreateUserRequest {
//!     username: "alice".to_string(),
//!     email: "alice@example.com".to_string(),
//! };
//! let response = user_service.create_user(request)?;
//! ```

pub mod user_service;
