//! # User Account HTTP Handlers
//!
//! `/api/v1/users` 스코프의 계정 관련 엔드포인트입니다.
//! 핸들러는 요청 추출, 쿠키 설정, 응답 봉투 작성만 담당하고
//! 실제 처리는 [`UserService`](crate::services::users::UserService)에 위임합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/register` | - | 회원가입 (multipart) | 201 Created |
//! | `POST` | `/login` | - | 로그인, 인증 쿠키 설정 | 200 OK |
//! | `POST` | `/refresh-token` | - | 토큰 갱신 (rotation) | 200 OK |
//! | `POST` | `/logout` | O | 로그아웃, 쿠키 제거 | 200 OK |
//! | `POST` | `/change-password` | O | 비밀번호 변경 | 200 OK |
//! | `GET` | `/current-user` | O | 현재 사용자 조회 | 200 OK |
//! | `PATCH` | `/update-account` | O | 이름/이메일 수정 | 200 OK |
//! | `PATCH` | `/avatar` | O | 아바타 변경 (multipart) | 200 OK |
//! | `PATCH` | `/cover-image` | O | 커버 이미지 변경 (multipart) | 200 OK |
//!
//! 인증이 필요한 엔드포인트는 `wrap = "AuthMiddleware"`로 보호되며,
//! 미들웨어가 부착한 [`AuthenticatedUser`]를 인자로 받습니다.

use actix_multipart::form::MultipartForm;
use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::dto::users::request::{
    ChangePasswordRequest, LoginRequest, RefreshTokenRequest, RegisterUserForm, UpdateAccountRequest,
    UploadAvatarForm, UploadCoverImageForm,
};
use crate::domain::dto::users::response::TokenPairResponse;
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;
use crate::handlers::session_cookies::{removal_cookies, token_cookies, REFRESH_TOKEN_COOKIE};
use crate::middlewares::AuthMiddleware;

/// 회원가입 핸들러
///
/// # Request
///
/// `multipart/form-data`: `fullName`, `username`, `email`, `password`, `avatar`(파일), `coverImage`(선택)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/register \
///   -F fullName="John Doe" -F username=johndoe -F email=john@example.com \
///   -F password=secret -F avatar=@avatar.png
/// ```
///
/// # Responses
///
/// * `201 Created` - 민감 정보가 제거된 사용자
/// * `400 Bad Request` - 필수 필드 누락, 이메일 형식 오류, 아바타 누락
/// * `409 Conflict` - 사용자명 또는 이메일 중복
#[post("/register")]
pub async fn register(
    registry: web::Data<ServiceRegistry>,
    form: MultipartForm<RegisterUserForm>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner().into_request().await?;
    let user = registry.user_service.register(request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(user, "User registered successfully")))
}

/// 로그인 핸들러
///
/// 성공 시 `accessToken`, `refreshToken` HttpOnly 쿠키를 설정하고
/// 같은 토큰을 응답 본문에도 포함합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/login \
///   -H "Content-Type: application/json" \
///   -d '{"email": "john@example.com", "password": "secret"}'
/// ```
#[post("/login")]
pub async fn login(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = registry.user_service.login(payload.into_inner()).await?;

    let tokens = TokenPair {
        access_token: response.access_token.clone(),
        refresh_token: response.refresh_token.clone(),
    };

    let mut builder = HttpResponse::Ok();
    for cookie in token_cookies(&tokens, &registry.cookie_config) {
        builder.cookie(cookie);
    }

    Ok(builder.json(ApiResponse::ok(response, "User logged in successfully")))
}

/// 로그아웃 핸들러
///
/// 저장된 리프레시 토큰을 제거하고 두 인증 쿠키를 만료시킵니다.
/// 이미 발급된 액세스 토큰은 만료될 때까지 유효합니다.
#[post("/logout", wrap = "AuthMiddleware")]
pub async fn logout(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    registry.user_service.logout(&user.user_id).await?;

    let mut builder = HttpResponse::Ok();
    for cookie in removal_cookies(&registry.cookie_config) {
        builder.cookie(cookie);
    }

    Ok(builder.json(ApiResponse::ok(json!({}), "User logged out")))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰은 `refreshToken` 쿠키를 우선 사용하고, 없으면 JSON 본문의
/// `refreshToken` 필드를 사용합니다. 성공 시 새 토큰 쌍을 발급하며 사용된 토큰은
/// 더 이상 쓸 수 없습니다.
#[post("/refresh-token")]
pub async fn refresh_token(
    req: HttpRequest,
    registry: web::Data<ServiceRegistry>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let incoming = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.trim().is_empty())
        .or_else(|| body.and_then(|body| body.into_inner().refresh_token));

    let tokens = registry.user_service.refresh(incoming).await?;

    let mut builder = HttpResponse::Ok();
    for cookie in token_cookies(&tokens, &registry.cookie_config) {
        builder.cookie(cookie);
    }

    Ok(builder.json(ApiResponse::ok(TokenPairResponse::from(tokens), "Access token refreshed")))
}

/// 비밀번호 변경 핸들러
///
/// ```json
/// { "oldPassword": "secret", "newPassword": "new-secret" }
/// ```
#[post("/change-password", wrap = "AuthMiddleware")]
pub async fn change_password(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    registry
        .user_service
        .change_password(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(json!({}), "Password changed successfully")))
}

#[get("/current-user", wrap = "AuthMiddleware")]
pub async fn current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user.user, "User fetched successfully")))
}

/// 계정 정보 수정 핸들러
///
/// ```json
/// { "fullName": "John Doe", "email": "john@example.com" }
/// ```
#[patch("/update-account", wrap = "AuthMiddleware")]
pub async fn update_account(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = registry
        .user_service
        .update_account(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Account details updated successfully")))
}

#[patch("/avatar", wrap = "AuthMiddleware")]
pub async fn update_avatar(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    form: MultipartForm<UploadAvatarForm>,
) -> Result<HttpResponse, AppError> {
    let file = form.into_inner().into_file().await?;
    let updated = registry.user_service.update_avatar(&user.user_id, file).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Avatar image updated successfully")))
}

#[patch("/cover-image", wrap = "AuthMiddleware")]
pub async fn update_cover_image(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    form: MultipartForm<UploadCoverImageForm>,
) -> Result<HttpResponse, AppError> {
    let file = form.into_inner().into_file().await?;
    let updated = registry.user_service.update_cover_image(&user.user_id, file).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Cover image updated successfully")))
}
