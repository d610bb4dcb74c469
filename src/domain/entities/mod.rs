//! # Domain Entities Module
//!
//! 저장소가 소유하는 핵심 엔티티들을 정의합니다.
//!
//! - [`users`] - 사용자 신원 레코드 (`User`)와 부분 수정 타입 (`UserChanges`)

pub mod users;
