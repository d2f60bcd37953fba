//! Cloudinary 업로드 구현
//!
//! [Upload API](https://cloudinary.com/documentation/image_upload_api_reference)의
//! 서명(signed) 업로드를 사용합니다. 파일은 base64 data URI로 전송되며, 서명은
//! 알파벳순으로 정렬한 파라미터 문자열에 API secret을 붙여 SHA-256으로 계산합니다.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::CloudinaryConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::media::MediaFile;
use crate::services::media::media_uploader::{MediaUploader, UploadedMedia};

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
    public_id: String,
}

pub struct CloudinaryUploader {
    config: CloudinaryConfig,
    client: reqwest::Client,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// 서명 대상 파라미터를 `key=value&...` 형태로 이어 붙입니다.
    ///
    /// `file`, `api_key`, `signature_algorithm`은 서명 대상이 아니므로 호출자가 제외해야 합니다.
    fn signature_payload(params: &[(&str, String)]) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn sign(params: &[(&str, String)], api_secret: &str) -> String {
        let payload = format!("{}{}", Self::signature_payload(params), api_secret);
        Sha256::digest(payload.as_bytes())
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }

    fn data_uri(file: &MediaFile) -> String {
        let content_type = file
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream");

        format!("data:{};base64,{}", content_type, STANDARD.encode(&file.bytes))
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, file: MediaFile) -> AppResult<UploadedMedia> {
        let mut signed_params: Vec<(&str, String)> = vec![
            ("public_id", Uuid::new_v4().to_string()),
            ("timestamp", Utc::now().timestamp().to_string()),
        ];
        if let Some(folder) = &self.config.folder {
            signed_params.push(("folder", folder.clone()));
        }

        let signature = Self::sign(&signed_params, &self.config.api_secret);

        let mut form = signed_params;
        form.push(("api_key", self.config.api_key.clone()));
        form.push(("signature", signature));
        form.push(("signature_algorithm", "sha256".to_string()));
        form.push(("file", Self::data_uri(&file)));

        log::debug!("☁️ Cloudinary 업로드 시작: {} ({} bytes)", file.file_name, file.len());

        let response = self.client
            .post(self.config.upload_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Cloudinary 업로드 실패 ({}): {}", status, error_text
            )));
        }

        let uploaded = response
            .json::<CloudinaryUploadResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 응답 파싱 실패: {}", e)))?;

        log::info!("☁️ Cloudinary 업로드 완료: {}", uploaded.public_id);

        Ok(UploadedMedia {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}
