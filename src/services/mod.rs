//! # Service Layer
//!
//! - [`auth`] - 토큰 발급/검증 (`TokenService`)
//! - [`media`] - 파일 업로드 (`MediaUploader`, `CloudinaryUploader`)
//! - [`users`] - 계정 비즈니스 로직 (`UserService`)

pub mod auth;
pub mod media;
pub mod users;
