//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - DTO 변환, 로깅                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserRecordStore - 검증된 레코드 보관          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 JSON 응답으로 변환됩니다.

pub mod users;
