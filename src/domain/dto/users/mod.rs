//! # User Data Transfer Objects Module
//!
//! | 엔드포인트 | 요청 DTO | 응답 데이터 |
//! |------------|----------|-------------|
//! | `POST /register` | `RegisterUserForm` (multipart) | `UserResponse` |
//! | `POST /login` | `LoginRequest` | `LoginResponse` |
//! | `POST /refresh-token` | `RefreshTokenRequest` | `TokenPairResponse` |
//! | `POST /change-password` | `ChangePasswordRequest` | `{}` |
//! | `PATCH /update-account` | `UpdateAccountRequest` | `UserResponse` |
//! | `PATCH /avatar` | `UploadAvatarForm` (multipart) | `UserResponse` |
//! | `PATCH /cover-image` | `UploadCoverImageForm` (multipart) | `UserResponse` |

pub mod request;
pub mod response;
