use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,

    /// 다음 수정 요청에 그대로 돌려보내면 충돌 검사가 적용됨
    pub concurrency_stamp: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            email_confirmed,
            concurrency_stamp,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.to_string(),
            username,
            email,
            email_confirmed,
            concurrency_stamp,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}
