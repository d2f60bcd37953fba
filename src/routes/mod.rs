//! # Route Configuration
//!
//! 모든 HTTP 라우트와 추출기(extractor) 설정을 등록합니다.
//!
//! ```text
//! /health                          헬스 체크
//! /api/v1/users/register           POST   (multipart)
//! /api/v1/users/login              POST
//! /api/v1/users/refresh-token      POST
//! /api/v1/users/logout             POST   🔒
//! /api/v1/users/change-password    POST   🔒
//! /api/v1/users/current-user       GET    🔒
//! /api/v1/users/update-account     PATCH  🔒
//! /api/v1/users/avatar             PATCH  🔒 (multipart)
//! /api/v1/users/cover-image        PATCH  🔒 (multipart)
//! ```
//!
//! 🔒 표시된 엔드포인트는 핸들러 단위로 `AuthMiddleware`가 적용됩니다.
//!
//! 잘못된 JSON 본문이나 multipart 본문은 추출 단계에서 400 에러 봉투로 변환됩니다.

use actix_multipart::form::MultipartFormConfig;
use actix_web::web;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// multipart 요청 전체 크기 제한
const MULTIPART_TOTAL_LIMIT: usize = 25 * 1024 * 1024;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(multipart_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            // Public
            .service(handlers::users::register)
            .service(handlers::users::login)
            .service(handlers::users::refresh_token)
            // Protected (AuthMiddleware)
            .service(handlers::users::logout)
            .service(handlers::users::change_password)
            .service(handlers::users::current_user)
            .service(handlers::users::update_account)
            .service(handlers::users::update_avatar)
            .service(handlers::users::update_cover_image)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
    })
}

fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(MULTIPART_TOTAL_LIMIT)
        .error_handler(|err, _req| {
            log::debug!("multipart 본문 파싱 실패: {}", err);
            AppError::ValidationError(format!("Invalid multipart body: {}", err)).into()
        })
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
