//! # User Service
//!
//! 계정 관련 비즈니스 로직을 담당하는 서비스 계층입니다.
//! 핸들러는 HTTP 입출력(쿠키, 응답 봉투)만 처리하고, 입력 검증부터 저장까지의
//! 흐름은 모두 이 서비스가 조율합니다.
//!
//! ## 의존성
//!
//! ```text
//! UserService
//! ├── Arc<dyn UserRepository>   사용자 문서 저장소
//! ├── Arc<dyn MediaUploader>    아바타/커버 이미지 업로드
//! └── Arc<TokenService>         토큰 발급/검증/폐기
//! ```
//!
//! ## 입력 정규화
//!
//! `username`과 `email`은 저장과 조회 모두 trim + 소문자로 정규화하여,
//! 대소문자만 다른 계정이 중복 생성되지 않도록 합니다.
//!
//! ## 업로드 순서
//!
//! 파일 업로드가 끝난 뒤에만 사용자 문서를 변경합니다. 업로드가 실패하면
//! 문서는 변경되지 않습니다.

use std::sync::Arc;

use bcrypt::{hash, verify};
use validator::{Validate, ValidateEmail};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{
    ChangePasswordRequest, LoginRequest, RegisterUserRequest, UpdateAccountRequest,
};
use crate::domain::dto::users::response::{LoginResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::domain::models::media::MediaFile;
use crate::domain::models::token::TokenPair;
use crate::repositories::users::user_repo::{UserRepository, DUPLICATE_USER_MESSAGE};
use crate::services::auth::TokenService;
use crate::services::media::MediaUploader;
use crate::utils::string_utils::normalize_identifier;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    media_uploader: Arc<dyn MediaUploader>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        media_uploader: Arc<dyn MediaUploader>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            media_uploader,
            token_service,
            bcrypt_cost,
        }
    }

    /// 회원가입
    ///
    /// # 처리 순서
    ///
    /// 1. `fullName`, `username`, `email`, `password` 필수 확인
    /// 2. 이메일 형식 검증
    /// 3. 사용자명/이메일 중복 확인
    /// 4. 아바타 필수 확인 후 아바타, 커버 이미지 업로드
    /// 5. 비밀번호 해싱 후 저장
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필수 필드 누락, 이메일 형식 오류, 아바타 누락
    /// * `ConflictError` - 이미 사용 중인 사용자명 또는 이메일
    /// * `ExternalServiceError` - 업로드 실패 (사용자는 생성되지 않음)
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<UserResponse> {
        let (Some(full_name), Some(username), Some(email), Some(password)) =
            (request.full_name, request.username, request.email, request.password)
        else {
            return Err(AppError::ValidationError("All fields are required".to_string()));
        };

        let username = normalize_identifier(&username);
        let email = normalize_identifier(&email);

        if !email.validate_email() {
            return Err(AppError::ValidationError("Invalid email address".to_string()));
        }

        if self
            .user_repo
            .find_by_username_or_email(Some(username.as_str()), Some(email.as_str()))
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
        }

        let avatar = request
            .avatar
            .ok_or_else(|| AppError::ValidationError("Avatar is required".to_string()))?;

        let avatar = self.media_uploader.upload(avatar).await?;
        let cover_image = match request.cover_image {
            Some(file) => Some(self.media_uploader.upload(file).await?.url),
            None => None,
        };

        let password_hash = self.hash_password(&password)?;

        let user = User::new(username, email, full_name, password_hash, avatar.url, cover_image);
        let created = self.user_repo.insert(user).await?;

        log::info!("✅ 회원가입 완료: {}", created.username);
        Ok(UserResponse::from(created))
    }

    /// 로그인
    ///
    /// 사용자명 또는 이메일로 사용자를 찾고 비밀번호를 확인한 뒤 토큰 쌍을 발급합니다.
    /// 둘 다 전달되면 이메일이 우선합니다.
    /// 새 리프레시 토큰이 저장되므로 이전에 발급된 리프레시 토큰은 무효화됩니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        if request.username.is_none() && request.email.is_none() {
            return Err(AppError::ValidationError("Username or email is required".to_string()));
        }

        let password = request
            .password
            .ok_or_else(|| AppError::ValidationError("Password is required".to_string()))?;

        // 이메일이 함께 오면 이메일로만 조회
        let (username, email) = match request.email.as_deref() {
            Some(email) => (None, Some(normalize_identifier(email))),
            None => (request.username.as_deref().map(normalize_identifier), None),
        };

        let user = self
            .user_repo
            .find_by_username_or_email(username.as_deref(), email.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;

        if !self.verify_password(&password, &user)? {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", user.username);
            return Err(AppError::AuthenticationError("Invalid user credentials".to_string()));
        }

        let user_id = Self::user_id(&user)?;
        let tokens = self.token_service.issue_tokens(&user_id).await?;

        log::info!("🔓 로그인 성공: {} ({})", user.username, user_id);
        Ok(LoginResponse::new(user, tokens))
    }

    /// 로그아웃 - 저장된 리프레시 토큰을 제거합니다.
    pub async fn logout(&self, user_id: &str) -> AppResult<()> {
        self.token_service.revoke(user_id).await?;
        log::info!("🔒 로그아웃: {}", user_id);
        Ok(())
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다 (rotation).
    pub async fn refresh(&self, refresh_token: Option<String>) -> AppResult<TokenPair> {
        let refresh_token = refresh_token
            .ok_or_else(|| AppError::AuthenticationError("Unauthorized request".to_string()))?;

        let user = self.token_service.verify_refresh(&refresh_token).await?;
        let user_id = Self::user_id(&user)?;

        self.token_service.issue_tokens(&user_id).await
    }

    /// 비밀번호 변경
    ///
    /// 이미 발급된 액세스 토큰과 리프레시 토큰은 그대로 유효합니다.
    pub async fn change_password(&self, user_id: &str, request: ChangePasswordRequest) -> AppResult<()> {
        let (Some(old_password), Some(new_password)) = (request.old_password, request.new_password) else {
            return Err(AppError::ValidationError("Old password and new password are required".to_string()));
        };

        let user = self.find_user(user_id).await?;

        if !self.verify_password(&old_password, &user)? {
            return Err(AppError::ValidationError("Invalid old password".to_string()));
        }

        let password_hash = self.hash_password(&new_password)?;
        self.user_repo.update_password(user_id, &password_hash).await?;

        log::info!("🔑 비밀번호 변경: {}", user_id);
        Ok(())
    }

    /// 이름과 이메일 수정
    ///
    /// 다른 사용자가 이미 사용 중인 이메일이면 `ConflictError`를 반환합니다.
    pub async fn update_account(&self, user_id: &str, request: UpdateAccountRequest) -> AppResult<UserResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let (Some(full_name), Some(email)) = (request.full_name, request.email) else {
            return Err(AppError::ValidationError("All fields are required".to_string()));
        };

        let email = normalize_identifier(&email);

        self.user_repo
            .update_account(user_id, &full_name, &email)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    pub async fn update_avatar(&self, user_id: &str, file: Option<MediaFile>) -> AppResult<UserResponse> {
        let file = file.ok_or_else(|| AppError::ValidationError("Avatar file is missing".to_string()))?;
        let uploaded = self.media_uploader.upload(file).await?;

        self.user_repo
            .update_avatar(user_id, &uploaded.url)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    pub async fn update_cover_image(&self, user_id: &str, file: Option<MediaFile>) -> AppResult<UserResponse> {
        let file = file.ok_or_else(|| AppError::ValidationError("Cover image file is missing".to_string()))?;
        let uploaded = self.media_uploader.upload(file).await?;

        self.user_repo
            .update_cover_image(user_id, &uploaded.url)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    async fn find_user(&self, user_id: &str) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let password_hash = hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    fn verify_password(&self, password: &str, user: &User) -> AppResult<bool> {
        verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }

    fn user_id(user: &User) -> AppResult<String> {
        user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))
    }
}
