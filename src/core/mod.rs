//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **검증 연동**: `validator` 에러를 `AppError::ValidationError`로 변환
//!
//! 의존성 주입은 전역 컨테이너 없이 생성자 인자로 처리합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::StoreConfig;
//! use crate::repositories::users::user_repo::UserRecordStore;
//! use crate::services::users::user_service::UserService;
//!
//! let store = Arc::new(UserRecordStore::new(&StoreConfig::from_env()));
//! let service = UserService::new(store);
//! ```

pub mod errors;
