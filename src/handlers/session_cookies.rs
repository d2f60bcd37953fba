//! 인증 쿠키 생성 도우미
//!
//! 로그인과 토큰 갱신 시 `accessToken`, `refreshToken` 쿠키를 설정하고,
//! 로그아웃 시 같은 속성의 만료 쿠키로 덮어써 제거합니다.

use actix_web::cookie::Cookie;

use crate::config::CookieConfig;
use crate::domain::models::token::TokenPair;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// HttpOnly 인증 쿠키
pub fn session_cookie(name: &'static str, value: String, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(name, value)
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .finish()
}

/// 토큰 쌍에 대한 두 쿠키
pub fn token_cookies(tokens: &TokenPair, config: &CookieConfig) -> [Cookie<'static>; 2] {
    [
        session_cookie(ACCESS_TOKEN_COOKIE, tokens.access_token.clone(), config),
        session_cookie(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone(), config),
    ]
}

/// 두 인증 쿠키를 제거하는 만료 쿠키
pub fn removal_cookies(config: &CookieConfig) -> [Cookie<'static>; 2] {
    [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE].map(|name| {
        let mut cookie = session_cookie(name, String::new(), config);
        cookie.make_removal();
        cookie
    })
}
