//! # HTTP Handlers
//!
//! - [`users`] - `/api/v1/users` 계정 엔드포인트
//! - [`session_cookies`] - 인증 쿠키 생성/제거 도우미

pub mod session_cookies;
pub mod users;
