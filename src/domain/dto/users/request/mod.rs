//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일 필수/형식 규칙 (`validator`)
//! 3. **저장 시 재검증**: 저장소가 쓰기마다 같은 규칙을 다시 적용
//!
//! 검증 실패는 `AppError::ValidationError`로 변환되어 HTTP 400으로 응답됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::{UpdateUserRequest, UserListQuery};
