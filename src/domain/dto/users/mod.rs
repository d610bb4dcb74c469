//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! | 타입 | 방향 | 용도 |
//! |------|------|------|
//! | `CreateUserRequest` | 요청 | `POST /api/v1/users` |
//! | `UpdateUserRequest` | 요청 | `PATCH /api/v1/users/{id}` |
//! | `UserListQuery` | 요청 | `GET /api/v1/users?email=` |
//! | `UserResponse` | 응답 | 사용자 정보 |
//! | `CreateUserResponse` | 응답 | 생성 결과 + 메시지 |

pub mod request;
pub mod response;
