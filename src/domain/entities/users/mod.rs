//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티와 이메일 검증 규칙을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use uuid::Uuid;
//! use crate::domain::entities::users::user::{User, UserChanges};
//!
//! let user = User::new(Uuid::new_v4(), "alice", "alice@example.com")?;
//!
//! let renamed = user.with_changes(&UserChanges {
//!     username: Some("alice_kim".to_string()),
//!     ..Default::default()
//! })?;
//! ```

pub mod user;
