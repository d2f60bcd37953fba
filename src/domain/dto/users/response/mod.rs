//! # 사용자 관련 응답 DTO 모듈
//!
//! - `UserResponse` - 민감 정보가 제거된 사용자 정보
//! - `LoginResponse` - 사용자 정보 + 토큰 쌍
//! - `TokenPairResponse` - 토큰 갱신 결과

pub mod user_response;

pub use user_response::{LoginResponse, TokenPairResponse, UserResponse};
