//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//! 조회용 정규화 키처럼 내부에서만 쓰는 필드는 응답에서 제외됩니다.

pub mod user_response;

pub use user_response::{CreateUserResponse, UserResponse};
