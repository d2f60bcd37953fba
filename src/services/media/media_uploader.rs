//! 미디어 업로드 추상화

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::models::media::MediaFile;

/// 업로드 완료된 파일의 공개 위치
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    /// HTTPS 공개 URL
    pub url: String,
    /// 업로드 서비스 내부 식별자
    pub public_id: String,
}

/// 파일을 외부 저장소에 올리고 공개 URL을 돌려주는 업로더
///
/// 실패 시 `AppError::ExternalServiceError`를 반환해야 하며, 호출자는 업로드가
/// 성공한 뒤에만 사용자 문서를 수정합니다.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: MediaFile) -> AppResult<UploadedMedia>;
}
