//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰과 인증 쿠키 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="access-token-signing-secret"
//! export ACCESS_TOKEN_EXPIRY="1d"
//! export REFRESH_TOKEN_SECRET="refresh-token-signing-secret"
//! export REFRESH_TOKEN_EXPIRY="10d"
//!
//! # 로컬 HTTP 개발 환경에서만 false로 설정
//! export COOKIE_SECURE="true"
//! ```
//!
//! 만료 시간은 `<숫자><단위>` 형식(`30s`, `15m`, `2h`, `10d`) 또는 초 단위 숫자를 받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let token_service = TokenService::new(jwt_config, user_repo);
//! ```

use std::env;

use crate::config::Environment;
use crate::core::errors::AppError;

const DEV_ACCESS_TOKEN_SECRET: &str = "dev-access-token-secret";
const DEV_REFRESH_TOKEN_SECRET: &str = "dev-refresh-token-secret";

/// JSON Web Token (JWT) 관련 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명되므로,
/// 한 종류의 토큰을 다른 용도로 재사용할 수 없습니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 1일, 리프레시 토큰 10일
/// - **프로덕션**: 액세스 토큰 15분, 리프레시 토큰 7-30일
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    /// 액세스 토큰 만료 시간 (초)
    pub access_expiry_secs: i64,
    pub refresh_secret: String,
    /// 리프레시 토큰 만료 시간 (초)
    pub refresh_expiry_secs: i64,
}

impl JwtConfig {
    pub fn new(
        access_secret: impl Into<String>,
        access_expiry_secs: i64,
        refresh_secret: impl Into<String>,
        refresh_expiry_secs: i64,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            access_expiry_secs,
            refresh_secret: refresh_secret.into(),
            refresh_expiry_secs,
        }
    }

    /// 환경 변수에서 JWT 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * 프로덕션 환경에서 비밀키가 설정되지 않은 경우
    /// * 만료 시간 형식이 올바르지 않은 경우
    ///
    /// 개발 환경에서 비밀키가 없으면 개발용 기본값을 사용하고 경고 로그를 남깁니다.
    pub fn from_env() -> Result<Self, AppError> {
        let environment = Environment::current();

        let access_secret = Self::secret_from_env("ACCESS_TOKEN_SECRET", DEV_ACCESS_TOKEN_SECRET, &environment)?;
        let refresh_secret = Self::secret_from_env("REFRESH_TOKEN_SECRET", DEV_REFRESH_TOKEN_SECRET, &environment)?;

        if access_secret == refresh_secret {
            log::warn!("⚠️ ACCESS_TOKEN_SECRET과 REFRESH_TOKEN_SECRET이 동일합니다. 서로 다른 값을 사용하세요");
        }

        let access_expiry = env::var("ACCESS_TOKEN_EXPIRY").unwrap_or_else(|_| "1d".to_string());
        let refresh_expiry = env::var("REFRESH_TOKEN_EXPIRY").unwrap_or_else(|_| "10d".to_string());

        Ok(Self {
            access_secret,
            access_expiry_secs: parse_expiry(&access_expiry)?,
            refresh_secret,
            refresh_expiry_secs: parse_expiry(&refresh_expiry)?,
        })
    }

    fn secret_from_env(key: &str, dev_default: &str, environment: &Environment) -> Result<String, AppError> {
        match env::var(key) {
            Ok(secret) if !secret.trim().is_empty() => Ok(secret),
            _ if environment.is_production() => {
                Err(AppError::InternalError(format!("{} must be set in production", key)))
            }
            _ => {
                log::warn!("⚠️ {}가 설정되지 않아 개발용 기본값을 사용합니다", key);
                Ok(dev_default.to_string())
            }
        }
    }
}

/// 만료 시간 문자열을 초 단위로 변환합니다.
///
/// `"90"` → 90, `"15m"` → 900, `"1d"` → 86400
pub fn parse_expiry(value: &str) -> Result<i64, AppError> {
    let value = value.trim();
    let invalid = || AppError::InternalError(format!("유효하지 않은 토큰 만료 시간 형식입니다: {:?}", value));

    let (digits, multiplier) = match value.chars().last() {
        Some('s') => (&value[..value.len() - 1], 1),
        Some('m') => (&value[..value.len() - 1], 60),
        Some('h') => (&value[..value.len() - 1], 60 * 60),
        Some('d') => (&value[..value.len() - 1], 24 * 60 * 60),
        Some(c) if c.is_ascii_digit() => (value, 1),
        _ => return Err(invalid()),
    };

    let amount = digits.trim().parse::<i64>().map_err(|_| invalid())?;
    if amount <= 0 {
        return Err(invalid());
    }

    amount.checked_mul(multiplier).ok_or_else(invalid)
}

/// 인증 쿠키 설정
///
/// `accessToken`, `refreshToken` 쿠키는 항상 HttpOnly로 발급되며,
/// `secure` 플래그는 `COOKIE_SECURE`로 제어합니다 (기본값 true).
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub secure: bool,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: true,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    pub fn from_env() -> Self {
        let secure = env::var("COOKIE_SECURE")
            .map(|value| !matches!(value.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Self {
            secure,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry_units() {
        assert_eq!(parse_expiry("90").unwrap(), 90);
        assert_eq!(parse_expiry("30s").unwrap(), 30);
        assert_eq!(parse_expiry("15m").unwrap(), 900);
        assert_eq!(parse_expiry("2h").unwrap(), 7200);
        assert_eq!(parse_expiry("1d").unwrap(), 86_400);
        assert_eq!(parse_expiry(" 10d ").unwrap(), 864_000);
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert!(parse_expiry("").is_err());
        assert!(parse_expiry("d").is_err());
        assert!(parse_expiry("1w").is_err());
        assert!(parse_expiry("abc").is_err());
        assert!(parse_expiry("0m").is_err());
        assert!(parse_expiry("-5").is_err());
        assert!(parse_expiry("9999999999999999d").is_err());
        assert!(parse_expiry(&format!("{}s", i64::MAX)).is_ok());
    }

    #[test]
    fn test_cookie_config_defaults_to_secure() {
        let config = CookieConfig::default();
        assert!(config.secure);
        assert_eq!(config.path, "/");
    }
}
