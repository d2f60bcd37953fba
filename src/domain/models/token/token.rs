//! JWT 클레임 및 토큰 쌍 모델

use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임
///
/// 요청마다 사용자 조회 없이 기본 신원 정보를 확인할 수 있도록 프로필 필드를 담습니다.
/// 다만 미들웨어는 서명 검증 후 항상 저장소에서 사용자를 다시 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenClaims {
    /// 사용자 ObjectId (hex)
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
}

/// 리프레시 토큰 클레임
///
/// 같은 초에 발급된 두 토큰도 서로 다르도록 `jti`에 UUID v4를 넣습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    #[serde(rename = "_id")]
    pub id: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
