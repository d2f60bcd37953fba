//! 업로드 대기 중인 파일

use actix_multipart::form::tempfile::TempFile;
use actix_web::web;

use crate::core::errors::{AppResult, ErrorContext};

/// 메모리로 읽어들인 업로드 파일
#[derive(Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// multipart 임시 파일을 읽어 `MediaFile`로 변환합니다.
    ///
    /// 필드가 없거나 빈 파일(0 byte)이면 `None`을 반환합니다.
    /// 파일 읽기는 `web::block`으로 blocking 스레드 풀에서 수행합니다.
    pub async fn from_temp_file(file: Option<TempFile>) -> AppResult<Option<Self>> {
        let Some(TempFile { file: temp, content_type, file_name, size, .. }) = file else {
            return Ok(None);
        };

        if size == 0 {
            return Ok(None);
        }

        let bytes = web::block(move || std::fs::read(temp.path()))
            .await
            .context("업로드 파일 읽기 작업 실패")?
            .context("업로드 임시 파일 읽기 실패")?;

        Ok(Some(Self {
            file_name: file_name.unwrap_or_else(|| "upload".to_string()),
            content_type: content_type.map(|mime| mime.to_string()),
            bytes,
        }))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_missing_file_is_none() {
        assert!(MediaFile::from_temp_file(None).await.unwrap().is_none());
    }

    #[test]
    fn test_debug_omits_bytes() {
        let file = MediaFile::new("a.png", Some("image/png".to_string()), vec![1, 2, 3]);
        let debug = format!("{:?}", file);

        assert!(debug.contains("size: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }
}
