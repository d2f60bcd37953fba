//! User Entity Implementation
//!
//! `users` 컬렉션 문서와 1:1로 대응되는 사용자 엔티티입니다.
//! 필드명은 camelCase로 저장되며, 비밀번호 해시는 `password` 필드에 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 회원가입 시 생성되며 삭제되지 않습니다. `refreshToken`은 로그인, 토큰 갱신,
/// 로그아웃 시에만 변경되고 나머지 필드는 프로필 수정으로 변경됩니다.
///
/// 이 구조체는 비밀번호 해시와 리프레시 토큰을 포함하므로 절대 그대로 응답에
/// 담지 말고 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로
/// 변환해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 소문자)
    pub username: String,
    /// 이메일 (unique, 소문자)
    pub email: String,
    pub full_name: String,
    /// bcrypt 해시
    #[serde(rename = "password")]
    pub password_hash: String,
    /// 아바타 이미지 URL
    pub avatar: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// 현재 유효한 리프레시 토큰 (로그아웃 상태면 None)
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 입력값 정규화와 비밀번호 해싱은 호출자(`UserService`)의 책임입니다.
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        password_hash: String,
        avatar: String,
        cover_image: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            full_name,
            password_hash,
            avatar,
            cover_image,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
