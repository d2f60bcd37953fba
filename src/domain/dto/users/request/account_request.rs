//! 계정 관리 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::{deserialize_optional_secret, deserialize_optional_string};

/// 비밀번호 변경 요청
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub old_password: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub new_password: Option<String>,
}

/// 계정 정보 수정 요청
///
/// `fullName`과 `email` 모두 필수이며, 이메일 형식은 `validator`로 검증합니다.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub full_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}
