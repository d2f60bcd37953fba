//! 미디어 업로드 서비스
//!
//! - [`media_uploader`] - `MediaUploader` trait과 업로드 결과 타입
//! - [`cloudinary_uploader`] - Cloudinary 서명 업로드 구현

pub mod cloudinary_uploader;
pub mod media_uploader;

pub use cloudinary_uploader::CloudinaryUploader;
pub use media_uploader::{MediaUploader, UploadedMedia};
