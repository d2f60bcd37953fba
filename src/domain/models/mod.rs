//! # Domain Models Module
//!
//! 영속되지 않는 도메인 값 객체를 정의합니다.
//!
//! - [`auth`] - 미들웨어가 요청에 부착하는 `AuthenticatedUser`
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`media`] - 업로드 대기 중인 파일 (`MediaFile`)

pub mod auth;
pub mod media;
pub mod token;
