//! 인증 관련 요청 DTO

use serde::Deserialize;

use crate::utils::string_utils::{deserialize_optional_secret, deserialize_optional_string};

/// 로그인 요청
///
/// `username`과 `email` 중 하나 이상이 필요합니다.
///
/// ```json
/// { "email": "john@example.com", "password": "secret" }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub password: Option<String>,
}

/// 토큰 갱신 요청
///
/// 리프레시 토큰은 `refreshToken` 쿠키를 우선 사용하고, 없으면 이 본문에서 읽습니다.
/// 쿠키만 보내는 클라이언트를 위해 본문 자체도 선택 사항입니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub refresh_token: Option<String>,
}
