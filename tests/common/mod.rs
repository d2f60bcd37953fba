#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use account_service_backend::config::{CookieConfig, JwtConfig};
use account_service_backend::core::errors::{AppError, AppResult};
use account_service_backend::core::ServiceRegistry;
use account_service_backend::domain::models::media::MediaFile;
use account_service_backend::repositories::users::InMemoryUserRepository;
use account_service_backend::services::media::{MediaUploader, UploadedMedia};
use actix_web::web;
use async_trait::async_trait;

pub const BOUNDARY: &str = "----accountservicetestboundary";

/// 업로드 결과를 가짜 CDN URL로 돌려주는 업로더
#[derive(Default)]
pub struct StubUploader {
    pub fail: AtomicBool,
    pub uploads: AtomicUsize,
}

#[async_trait]
impl MediaUploader for StubUploader {
    async fn upload(&self, file: MediaFile) -> AppResult<UploadedMedia> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError("stub upload failure".to_string()));
        }

        let n = self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(UploadedMedia {
            url: format!("https://cdn.example.com/{}/{}", n, file.file_name),
            public_id: n.to_string(),
        })
    }
}

pub struct TestContext {
    pub registry: web::Data<ServiceRegistry>,
    pub repo: Arc<InMemoryUserRepository>,
    pub uploader: Arc<StubUploader>,
}

pub fn context() -> TestContext {
    let repo = Arc::new(InMemoryUserRepository::new());
    let uploader = Arc::new(StubUploader::default());

    let registry = ServiceRegistry::builder()
        .user_repository(repo.clone())
        .media_uploader(uploader.clone())
        .jwt_config(JwtConfig::new("test-access-secret", 900, "test-refresh-secret", 86_400))
        .cookie_config(CookieConfig {
            secure: false,
            ..CookieConfig::default()
        })
        .bcrypt_cost(4)
        .build()
        .expect("registry");

    TestContext {
        registry: web::Data::new(registry),
        repo,
        uploader,
    }
}

/// multipart/form-data 본문과 Content-Type 헤더 값
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes());
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (name, file_name, bytes) in files {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                name, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}

pub fn register_body(username: &str, email: &str) -> (String, Vec<u8>) {
    multipart_body(
        &[
            ("fullName", "John Doe"),
            ("username", username),
            ("email", email),
            ("password", "password123"),
        ],
        &[("avatar", "avatar.png", &b"\x89PNG fake avatar"[..])],
    )
}
