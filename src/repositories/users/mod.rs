//! 사용자 데이터 액세스 계층을 담당하는 저장소 모듈
//!
//! [`UserRecordStore`](user_repo::UserRecordStore)가 ID → 레코드 매핑을 소유하며,
//! 모든 쓰기에서 이메일 유효성을 보장합니다.

pub mod user_repo;
