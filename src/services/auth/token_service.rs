//! # Token Service
//!
//! 액세스/리프레시 토큰의 발급, 검증, 회전(rotation), 폐기를 담당합니다.
//!
//! ## 토큰 생명주기
//!
//! ```text
//! login ──► issue_tokens ──► (access, refresh)   refresh는 사용자 문서에 저장
//!                                 │
//!   보호된 요청 ◄── verify_access ─┘
//!                                 │
//! refresh-token ──► verify_refresh ──► issue_tokens (이전 refresh 무효화)
//!                                 │
//! logout ──► revoke ──────────────┘ (저장된 refresh 제거)
//! ```
//!
//! - 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키(HS256)로 서명됩니다.
//! - 사용자당 유효한 리프레시 토큰은 저장된 값 하나뿐이며, 서명이 유효해도 저장된 값과
//!   다르면 거부됩니다.
//! - 액세스 토큰은 저장되지 않으며 만료 전까지 유효합니다.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{AccessTokenClaims, RefreshTokenClaims, TokenPair};
use crate::repositories::users::user_repo::{parse_object_id, UserRepository};

const TOKEN_GENERATION_FAILED: &str = "Something went wrong while generating refresh and access token";

pub struct TokenService {
    config: JwtConfig,
    user_repo: Arc<dyn UserRepository>,
}

impl TokenService {
    pub fn new(config: JwtConfig, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { config, user_repo }
    }

    /// 새 토큰 쌍을 발급하고 리프레시 토큰을 사용자 문서에 저장합니다.
    ///
    /// 이전에 저장된 리프레시 토큰은 덮어써져 더 이상 사용할 수 없습니다.
    ///
    /// # Errors
    ///
    /// 사용자 조회, 서명, 저장 중 어느 단계가 실패해도 `InternalError`를 반환합니다.
    pub async fn issue_tokens(&self, user_id: &str) -> AppResult<TokenPair> {
        match self.try_issue_tokens(user_id).await {
            Ok(tokens) => Ok(tokens),
            Err(e) => {
                log::error!("❌ 토큰 발급 실패 (user: {}): {}", user_id, e);
                Err(AppError::InternalError(TOKEN_GENERATION_FAILED.to_string()))
            }
        }
    }

    async fn try_issue_tokens(&self, user_id: &str) -> AppResult<TokenPair> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("토큰 발급 대상 사용자 없음: {}", user_id)))?;

        let access_token = self.generate_access_token(&user)?;
        let refresh_token = self.generate_refresh_token(&user)?;

        self.user_repo
            .set_refresh_token(user_id, Some(refresh_token.as_str()))
            .await?;

        log::debug!("🔑 토큰 발급 완료: {}", user_id);

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();

        let claims = AccessTokenClaims {
            id: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            email: user.email.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            iat: now,
            exp: Self::expires_at(now, self.config.access_expiry_secs)?,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.config.access_secret.as_ref()))
            .map_err(|e| AppError::InternalError(format!("액세스 토큰 생성 실패: {}", e)))
    }

    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();

        let claims = RefreshTokenClaims {
            id: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: Self::expires_at(now, self.config.refresh_expiry_secs)?,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.config.refresh_secret.as_ref()))
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    fn expires_at(now: i64, expiry_secs: i64) -> AppResult<i64> {
        now.checked_add(expiry_secs)
            .ok_or_else(|| AppError::InternalError(format!("토큰 만료 시각 계산 범위 초과: {}초", expiry_secs)))
    }

    /// 액세스 토큰을 검증하고 토큰 주인을 반환합니다.
    ///
    /// 토큰이 비어 있거나, 형식이 잘못되었거나, 만료되었거나, 다른 키로 서명되었거나,
    /// 사용자가 더 이상 존재하지 않으면 `AuthenticationError`를 반환합니다.
    pub async fn verify_access(&self, token: &str) -> AppResult<User> {
        let claims: AccessTokenClaims = Self::decode_claims(token, &self.config.access_secret)
            .map_err(|reason| {
                log::debug!("액세스 토큰 거부: {}", reason);
                AppError::AuthenticationError("Invalid access token".to_string())
            })?;

        self.find_token_owner(&claims.id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid access token".to_string()))
    }

    /// 리프레시 토큰을 검증하고 토큰 주인을 반환합니다.
    ///
    /// 서명과 만료 검증에 더해, 사용자 문서에 저장된 토큰과 정확히 일치해야 합니다.
    /// 이미 회전되었거나 로그아웃으로 폐기된 토큰은 거부됩니다.
    pub async fn verify_refresh(&self, token: &str) -> AppResult<User> {
        let claims: RefreshTokenClaims = Self::decode_claims(token, &self.config.refresh_secret)
            .map_err(|reason| {
                log::debug!("리프레시 토큰 거부: {}", reason);
                AppError::AuthenticationError("Invalid refresh token".to_string())
            })?;

        let user = self
            .find_token_owner(&claims.id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid refresh token".to_string()))?;

        if user.refresh_token.as_deref() != Some(token) {
            log::warn!("⚠️ 저장된 값과 다른 리프레시 토큰 사용 시도: {}", claims.id);
            return Err(AppError::AuthenticationError("Refresh token is expired or used".to_string()));
        }

        Ok(user)
    }

    /// 저장된 리프레시 토큰을 제거합니다.
    pub async fn revoke(&self, user_id: &str) -> AppResult<()> {
        self.user_repo.set_refresh_token(user_id, None).await?;
        log::debug!("🔒 리프레시 토큰 폐기: {}", user_id);
        Ok(())
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("Unauthorized request".to_string())),
        }
    }

    fn decode_claims<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, String> {
        if token.trim().is_empty() {
            return Err("빈 토큰".to_string());
        }

        decode::<T>(token, &DecodingKey::from_secret(secret.as_ref()), &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| e.to_string())
    }

    /// 클레임의 사용자 ID로 사용자를 조회합니다.
    ///
    /// ID 형식이 잘못된 경우 `Ok(None)`, 저장소 장애는 그대로 전파됩니다.
    async fn find_token_owner(&self, user_id: &str) -> AppResult<Option<User>> {
        if parse_object_id(user_id).is_err() {
            return Ok(None);
        }

        self.user_repo.find_by_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    fn config() -> JwtConfig {
        JwtConfig::new("access-secret", 900, "refresh-secret", 86_400)
    }

    async fn setup() -> (TokenService, Arc<InMemoryUserRepository>, String) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(User::new(
                "johndoe".to_string(),
                "john@example.com".to_string(),
                "John Doe".to_string(),
                "hash".to_string(),
                "https://cdn.example.com/a.png".to_string(),
                None,
            ))
            .await
            .unwrap();
        let user_id = user.id_string().unwrap();

        (TokenService::new(config(), repo.clone()), repo, user_id)
    }

    #[actix_web::test]
    async fn test_issue_tokens_persists_refresh_token() {
        let (service, repo, user_id) = setup().await;

        let tokens = service.issue_tokens(&user_id).await.unwrap();
        let stored = repo.find_by_id(&user_id).await.unwrap().unwrap();

        assert_eq!(stored.refresh_token.as_deref(), Some(tokens.refresh_token.as_str()));
        assert_ne!(tokens.access_token, tokens.refresh_token);
    }

    #[actix_web::test]
    async fn test_issue_tokens_for_missing_user_is_internal_error() {
        let (service, _, _) = setup().await;

        let result = service.issue_tokens(&mongodb::bson::oid::ObjectId::new().to_hex()).await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_expiry_overflow_is_internal_error() {
        let (_, repo, user_id) = setup().await;
        let service = TokenService::new(JwtConfig::new("access-secret", i64::MAX, "refresh-secret", 86_400), repo.clone());

        let result = service.issue_tokens(&user_id).await;
        assert!(matches!(result, Err(AppError::InternalError(_))));

        let stored = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert!(stored.refresh_token.is_none());
    }

    #[actix_web::test]
    async fn test_verify_access_round_trip() {
        let (service, _, user_id) = setup().await;
        let tokens = service.issue_tokens(&user_id).await.unwrap();

        let user = service.verify_access(&tokens.access_token).await.unwrap();
        assert_eq!(user.id_string().unwrap(), user_id);
    }

    #[actix_web::test]
    async fn test_tokens_are_not_interchangeable() {
        let (service, _, user_id) = setup().await;
        let tokens = service.issue_tokens(&user_id).await.unwrap();

        assert!(matches!(
            service.verify_access(&tokens.refresh_token).await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.verify_refresh(&tokens.access_token).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_rotation_invalidates_previous_refresh_token() {
        let (service, _, user_id) = setup().await;

        let first = service.issue_tokens(&user_id).await.unwrap();
        let second = service.issue_tokens(&user_id).await.unwrap();
        assert_ne!(first.refresh_token, second.refresh_token);

        let old = service.verify_refresh(&first.refresh_token).await;
        assert!(matches!(old, Err(AppError::AuthenticationError(msg)) if msg == "Refresh token is expired or used"));

        assert!(service.verify_refresh(&second.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_revoke_invalidates_refresh_token() {
        let (service, _, user_id) = setup().await;
        let tokens = service.issue_tokens(&user_id).await.unwrap();

        service.revoke(&user_id).await.unwrap();

        assert!(matches!(
            service.verify_refresh(&tokens.refresh_token).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_wrongly_signed_token_is_rejected() {
        let (service, repo, user_id) = setup().await;
        let user = repo.find_by_id(&user_id).await.unwrap().unwrap();

        let forger = TokenService::new(JwtConfig::new("other-secret", 900, "other-refresh", 900), repo.clone());
        let forged = forger.generate_access_token(&user).unwrap();

        assert!(matches!(service.verify_access(&forged).await, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_expired_access_token_is_rejected() {
        let (service, repo, user_id) = setup().await;
        let user = repo.find_by_id(&user_id).await.unwrap().unwrap();

        let expired = TokenService::new(JwtConfig::new("access-secret", -3600, "refresh-secret", 900), repo.clone())
            .generate_access_token(&user)
            .unwrap();

        assert!(matches!(service.verify_access(&expired).await, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_garbage_and_empty_tokens_are_rejected() {
        let (service, _, _) = setup().await;

        for token in ["", "   ", "not.a.jwt", "abc"] {
            assert!(matches!(service.verify_access(token).await, Err(AppError::AuthenticationError(_))));
            assert!(matches!(service.verify_refresh(token).await, Err(AppError::AuthenticationError(_))));
        }
    }

    #[actix_web::test]
    async fn test_token_for_deleted_user_is_rejected() {
        let (service, repo, user_id) = setup().await;
        let user = repo.find_by_id(&user_id).await.unwrap().unwrap();

        let mut ghost = user.clone();
        ghost.id = Some(mongodb::bson::oid::ObjectId::new());
        let token = service.generate_access_token(&ghost).unwrap();

        assert!(matches!(service.verify_access(&token).await, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(TokenService::extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(TokenService::extract_bearer_token("Bearer ").is_err());
        assert!(TokenService::extract_bearer_token("abc.def.ghi").is_err());
    }
}
