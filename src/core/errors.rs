//! # Application Error Handling System
//!
//! 계정 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 동일한 JSON 에러 봉투(envelope)로 변환되도록 합니다.
//!
//! ## 에러 응답 형식
//!
//! ```json
//! {
//!   "statusCode": 409,
//!   "message": "User with email or username already exists",
//!   "success": false
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 입력 누락, 형식 오류 |
//! | `AuthenticationError` | 401 Unauthorized | 잘못된 자격 증명, 토큰 오류 |
//! | `NotFound` | 404 Not Found | 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 중복 사용자명/이메일 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 미디어 업로드 실패 |
//! | `InternalError` | 500 Internal Server Error | 토큰 서명, 해싱 실패 등 |
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 기록되고, 클라이언트에는 일반화된
//! 메시지만 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = user_repo.find_by_id(&user_id).await?
//!     .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 5xx 응답에서 클라이언트에 노출되는 메시지
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong while processing the request";

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 요청 처리 중 발생할 수 있는 실패 범주 하나에 대응하며,
/// [`AppError::status_code`]를 통해 HTTP 상태 코드로 매핑됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 외부 API 에러 변환
/// client.post(url).send().await
///     .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// 필수 필드 누락, 이메일 형식 오류, 잘못된 요청 본문 등에서 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스를 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 (409)
    ///
    /// 이미 등록된 사용자명 또는 이메일로 가입/수정하려 할 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    ///
    /// 잘못된 비밀번호, 누락/만료/위조된 토큰, 재사용된 리프레시 토큰 등.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500)
    ///
    /// 미디어 업로드 서비스 호출 실패 시 발생합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub success: bool,
}

impl AppError {
    /// 에러 변형에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에 전달할 메시지
    ///
    /// 4xx 에러는 원본 메시지를 그대로, 5xx 에러는 일반화된 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg) => msg.clone(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status_code().as_u16(),
            message: self.client_message(),
            success: false,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 원인을 서버 로그에 남긴 뒤 일반화된 메시지로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = AppError::status_code(self);

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        } else {
            log::debug!("요청 거부 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status).json(self.to_body())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let bytes = std::fs::read(path).context("Failed to read uploaded file")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
