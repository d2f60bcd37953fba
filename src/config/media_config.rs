//! 미디어 업로드(Cloudinary) 설정
//!
//! ```bash
//! export CLOUDINARY_CLOUD_NAME="my-cloud"
//! export CLOUDINARY_API_KEY="123456789012345"
//! export CLOUDINARY_API_SECRET="cloudinary-api-secret"
//! export CLOUDINARY_FOLDER="account-service"   # 선택
//! ```

use std::env;

use crate::core::errors::AppError;

/// Cloudinary 업로드 API 자격 증명
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// 업로드된 파일이 저장될 폴더 (없으면 루트)
    pub folder: Option<String>,
}

impl CloudinaryConfig {
    /// 환경 변수에서 Cloudinary 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`, `CLOUDINARY_API_SECRET` 중
    /// 하나라도 없으면 `InternalError`를 반환합니다.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            cloud_name: Self::required("CLOUDINARY_CLOUD_NAME")?,
            api_key: Self::required("CLOUDINARY_API_KEY")?,
            api_secret: Self::required("CLOUDINARY_API_SECRET")?,
            folder: env::var("CLOUDINARY_FOLDER")
                .ok()
                .map(|folder| folder.trim().to_string())
                .filter(|folder| !folder.is_empty()),
        })
    }

    /// 업로드 엔드포인트 URL
    ///
    /// `auto` 리소스 타입을 사용하여 이미지 외 파일도 허용합니다.
    pub fn upload_url(&self) -> String {
        format!("https://api.cloudinary.com/v1_1/{}/auto/upload", self.cloud_name)
    }

    fn required(key: &str) -> Result<String, AppError> {
        env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::InternalError(format!("{} 환경 변수가 설정되지 않았습니다", key)))
    }
}
