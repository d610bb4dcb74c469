//! 사용자 레코드 서비스
//!
//! 검증된 필드를 가진 사용자 신원 레코드를 보관하고 HTTP로 제공하는 서비스입니다.
//! 모든 레코드는 비어 있지 않고 형식이 올바른 이메일을 가지며,
//! 검증 실패 시 호출자에게 다음 메시지 중 하나가 전달됩니다.
//!
//! - 빈 이메일 → `"Email field is required"`
//! - 형식 오류 → `"Enter a valid email address"`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, DTO 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← ID 파싱, DTO 변환, 로깅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRecordStore (쓰기 시 검증)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_record_service::config::StoreConfig;
//! use user_record_service::repositories::users::user_repo::UserRecordStore;
//!
//! let store = Arc::new(UserRecordStore::new(&StoreConfig::default()));
//! let alice = store.create("alice", "alice@example.com")?;
//! assert_eq!(store.get(&alice.id)?.email, "alice@example.com");
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
