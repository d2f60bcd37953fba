//! multipart/form-data 요청 DTO
//!
//! 회원가입, 아바타 변경, 커버 이미지 변경은 파일을 포함하므로 JSON 대신
//! `actix-multipart`의 [`MultipartForm`]으로 받습니다. 업로드된 파일은 임시 파일로
//! 저장되며, 서비스 계층에 넘기기 전에 [`MediaFile`]로 읽어들입니다.

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};

use crate::core::errors::AppResult;
use crate::domain::models::media::MediaFile;
use crate::utils::string_utils::{clean_optional_secret, clean_optional_string};

/// 회원가입 multipart 폼
///
/// | 필드 | 타입 | 필수 |
/// |------|------|------|
/// | `fullName` | text | O |
/// | `username` | text | O |
/// | `email` | text | O |
/// | `password` | text | O |
/// | `avatar` | file | O |
/// | `coverImage` | file | X |
#[derive(Debug, MultipartForm)]
pub struct RegisterUserForm {
    #[multipart(rename = "fullName")]
    pub full_name: Option<Text<String>>,
    pub username: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub password: Option<Text<String>>,
    #[multipart(limit = "10 MiB")]
    pub avatar: Option<TempFile>,
    #[multipart(rename = "coverImage", limit = "10 MiB")]
    pub cover_image: Option<TempFile>,
}

/// 파일 내용까지 읽어들인 회원가입 요청
#[derive(Debug, Default)]
pub struct RegisterUserRequest {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<MediaFile>,
    pub cover_image: Option<MediaFile>,
}

impl RegisterUserForm {
    /// 텍스트 필드를 정리하고 임시 파일을 메모리로 읽어옵니다.
    ///
    /// `password`는 공백 여부만 검사하고 원본 그대로 전달합니다.
    pub async fn into_request(self) -> AppResult<RegisterUserRequest> {
        Ok(RegisterUserRequest {
            full_name: text_value(self.full_name),
            username: text_value(self.username),
            email: text_value(self.email),
            password: clean_optional_secret(self.password.map(Text::into_inner)),
            avatar: MediaFile::from_temp_file(self.avatar).await?,
            cover_image: MediaFile::from_temp_file(self.cover_image).await?,
        })
    }
}

/// 아바타 변경 폼 (`avatar` 파일 필드)
#[derive(Debug, MultipartForm)]
pub struct UploadAvatarForm {
    #[multipart(limit = "10 MiB")]
    pub avatar: Option<TempFile>,
}

impl UploadAvatarForm {
    pub async fn into_file(self) -> AppResult<Option<MediaFile>> {
        MediaFile::from_temp_file(self.avatar).await
    }
}

/// 커버 이미지 변경 폼 (`coverImage` 파일 필드)
#[derive(Debug, MultipartForm)]
pub struct UploadCoverImageForm {
    #[multipart(rename = "coverImage", limit = "10 MiB")]
    pub cover_image: Option<TempFile>,
}

impl UploadCoverImageForm {
    pub async fn into_file(self) -> AppResult<Option<MediaFile>> {
        MediaFile::from_temp_file(self.cover_image).await
    }
}

fn text_value(field: Option<Text<String>>) -> Option<String> {
    clean_optional_string(field.map(Text::into_inner))
}
