//! 데이터 액세스 계층을 담당하는 저장소 모듈
//!
//! 사용자 레코드를 메모리에 보관하는 [`UserRecordStore`](users::user_repo::UserRecordStore)를 제공합니다.
//! 저장소는 생성자 인자로 설정을 받고, 호출자가 `Arc`로 감싸 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::StoreConfig;
//! use crate::repositories::users::user_repo::UserRecordStore;
//!
//! let store = Arc::new(UserRecordStore::new(&StoreConfig::from_env()));
//! let users = store.find_by_email("user@example.com")?;
//! ```

pub mod users;
