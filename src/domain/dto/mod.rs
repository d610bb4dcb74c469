//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/        # 요청 DTO (클라이언트 → 서버)
//!     │   ├── create_user.rs
//!     │   └── update_user.rs
//!     └── response/       # 응답 DTO (서버 → 클라이언트)
//!         └── user_response.rs
//! ```
//!
//! 요청 DTO는 `validator` derive로 입력을 검증하고,
//! 응답 DTO는 엔티티에서 `From` 변환으로 만들어집니다.

pub mod users;
