//! 사용자 응답 DTO
//!
//! [`UserResponse`]는 `User` 엔티티에서 비밀번호 해시와 리프레시 토큰을 제거한
//! 투영(projection)입니다. 해당 필드가 타입에 존재하지 않으므로 응답에 섞여 들어갈
//! 수 없습니다.
//!
//! ```json
//! {
//!   "_id": "507f1f77bcf86cd799439011",
//!   "username": "johndoe",
//!   "email": "john@example.com",
//!   "fullName": "John Doe",
//!   "avatar": "https://res.cloudinary.com/.../avatar.png",
//!   "coverImage": null,
//!   "createdAt": "2024-01-01T00:00:00Z",
//!   "updatedAt": "2024-01-01T00:00:00Z"
//! }
//! ```

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    /// RFC 3339 형식
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}

fn format_timestamp(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

/// 로그인 응답 데이터
///
/// 쿠키를 사용할 수 없는 클라이언트(모바일 앱 등)를 위해 토큰을 본문에도 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

/// 토큰 갱신 응답 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}
