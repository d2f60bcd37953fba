//! # 사용자 관련 요청 DTO 모듈
//!
//! JSON 요청은 `serde`로, 파일 업로드 요청은 `actix-multipart`의 `MultipartForm`으로
//! 역직렬화합니다. 빈 문자열과 공백 문자열은 역직렬화 단계에서 `None`으로 정리되므로
//! 서비스 계층은 `Option`만 확인하면 됩니다.
//!
//! 형식 검증 실패(`validator::ValidationErrors`)는 `AppError::ValidationError`로
//! 변환되어 HTTP 400 응답이 됩니다.

pub mod account_request;
pub mod auth_request;
pub mod register_request;

pub use account_request::{ChangePasswordRequest, UpdateAccountRequest};
pub use auth_request::{LoginRequest, RefreshTokenRequest};
pub use register_request::{RegisterUserForm, RegisterUserRequest, UploadAvatarForm, UploadCoverImageForm};
