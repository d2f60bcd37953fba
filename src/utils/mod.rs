//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 정규화, serde 역직렬화 도우미
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_identifier;
//!
//! let email = normalize_identifier("  Alice@Example.com ");
//! assert_eq!(email, "alice@example.com");
//! ```

pub mod string_utils;
