//! 성공 응답 봉투(envelope)
//!
//! ```json
//! {
//!   "statusCode": 200,
//!   "data": { ... },
//!   "message": "User logged in successfully",
//!   "success": true
//! }
//! ```
//!
//! 에러 응답은 [`AppError`](crate::core::errors::AppError)가 같은 형태로 생성합니다.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            message: message.into(),
            success: status.is_success(),
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::created(json!({ "username": "johndoe" }), "User registered successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 201);
        assert_eq!(value["data"]["username"], "johndoe");
        assert_eq!(value["message"], "User registered successfully");
        assert_eq!(value["success"], true);
    }

    #[test]
    fn test_empty_data_serializes_as_object() {
        let response = ApiResponse::ok(json!({}), "User logged out");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert!(value["data"].as_object().unwrap().is_empty());
    }
}
