//! 문자열 처리 유틸리티
//!
//! 요청 DTO 역직렬화와 서비스 계층 입력 정규화에 사용되는 함수들입니다.

use serde::Deserialize;

/// 공백만 있는 문자열을 `None`으로 정리합니다.
///
/// 앞뒤 공백은 제거된 상태로 반환됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 비밀번호처럼 값 자체가 의미를 갖는 문자열 정리
///
/// 공백만 있으면 `None`, 그 외에는 앞뒤 공백을 포함한 원본을 그대로 반환합니다.
pub fn clean_optional_secret(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// 사용자명/이메일 비교용 정규화 (trim + 소문자)
pub fn normalize_identifier(value: &str) -> String {
    value.trim().to_lowercase()
}

/// serde용 선택적 문자열 역직렬화
///
/// 빈 문자열과 공백 문자열은 `None`으로 처리되어,
/// 필드 누락과 빈 값을 동일하게 다룰 수 있습니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct LoginRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     username: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// serde용 비밀 문자열 역직렬화 ([`clean_optional_secret`] 적용)
pub fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_secret(opt))
}
