//! # Domain Layer Module
//!
//! 사용자 신원 레코드의 도메인 타입을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - User 엔티티와 이메일 검증 규칙
//! └── dto       - HTTP 요청/응답 데이터 구조
//!      │
//!      ▼
//! Services → Repositories (UserRecordStore)
//! ```
//!
//! 엔티티는 외부 프레임워크 타입을 상속하지 않고 필드를 직접 선언합니다.
//! DTO는 엔티티와 분리되어 있어 정규화 키 같은 내부 필드는 응답에 노출되지 않습니다.

pub mod entities;
pub mod dto;
