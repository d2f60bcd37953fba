//! # Middlewares
//!
//! - [`auth_middleware`] - 액세스 토큰 검증 후 `AuthenticatedUser`를 요청에 부착

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
