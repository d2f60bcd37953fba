//! # Core Module
//!
//! 서비스 전반에서 공유되는 기반 기능을 제공합니다.
//!
//! - [`errors`] - `AppError`와 HTTP 에러 응답 변환
//! - [`registry`] - 명시적으로 조립되는 서비스 컨테이너 (`ServiceRegistry`)
//!
//! 핸들러는 `web::Data<ServiceRegistry>`를 통해 서비스에 접근하고,
//! 서비스 계층은 `AppResult<T>`로 실패를 전파합니다.

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorContext};
pub use registry::ServiceRegistry;
