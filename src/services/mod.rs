//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 요청 DTO를 저장소 호출로 바꾸고, 엔티티를 응답 DTO로 변환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::user_service::UserService;
//!
//! let user_service = UserService::new(Arc::clone(&store));
//! let users = user_service.list_users(None)?;
//! ```

pub mod users;
