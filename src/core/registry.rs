//! # Service Registry
//!
//! 애플리케이션이 사용하는 서비스 인스턴스를 한곳에 모아 두는 컨테이너입니다.
//! 전역 싱글톤 대신 `main`에서 명시적으로 조립한 뒤 `web::Data`로 actix-web에
//! 등록하므로, 테스트에서는 인메모리 저장소나 가짜 업로더를 그대로 주입할 수 있습니다.
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::builder()
//!     .user_repository(Arc::new(MongoUserRepository::new(database)))
//!     .media_uploader(Arc::new(CloudinaryUploader::new(CloudinaryConfig::from_env()?)))
//!     .jwt_config(JwtConfig::from_env()?)
//!     .build()?;
//!
//! App::new().app_data(web::Data::new(registry));
//! ```

use std::sync::Arc;

use crate::config::{CookieConfig, JwtConfig, PasswordConfig};
use crate::core::errors::AppError;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;
use crate::services::media::MediaUploader;
use crate::services::users::UserService;

/// 요청 핸들러와 미들웨어가 공유하는 서비스 묶음
pub struct ServiceRegistry {
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub cookie_config: CookieConfig,
}

impl ServiceRegistry {
    pub fn builder() -> ServiceRegistryBuilder {
        ServiceRegistryBuilder::default()
    }
}

/// [`ServiceRegistry`] 조립기
///
/// 저장소, 업로더, JWT 설정은 필수이며 나머지는 환경 변수 기반 기본값을 사용합니다.
#[derive(Default)]
pub struct ServiceRegistryBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    media_uploader: Option<Arc<dyn MediaUploader>>,
    jwt_config: Option<JwtConfig>,
    cookie_config: Option<CookieConfig>,
    bcrypt_cost: Option<u32>,
}

impl ServiceRegistryBuilder {
    pub fn user_repository(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn media_uploader(mut self, uploader: Arc<dyn MediaUploader>) -> Self {
        self.media_uploader = Some(uploader);
        self
    }

    pub fn jwt_config(mut self, config: JwtConfig) -> Self {
        self.jwt_config = Some(config);
        self
    }

    pub fn cookie_config(mut self, config: CookieConfig) -> Self {
        self.cookie_config = Some(config);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn build(self) -> Result<ServiceRegistry, AppError> {
        let user_repo = self
            .user_repo
            .ok_or_else(|| AppError::InternalError("UserRepository가 등록되지 않았습니다".to_string()))?;
        let media_uploader = self
            .media_uploader
            .ok_or_else(|| AppError::InternalError("MediaUploader가 등록되지 않았습니다".to_string()))?;
        let jwt_config = self
            .jwt_config
            .ok_or_else(|| AppError::InternalError("JWT 설정이 등록되지 않았습니다".to_string()))?;

        let token_service = Arc::new(TokenService::new(jwt_config, user_repo.clone()));
        let user_service = Arc::new(UserService::new(
            user_repo,
            media_uploader,
            token_service.clone(),
            self.bcrypt_cost.unwrap_or_else(PasswordConfig::bcrypt_cost),
        ));

        Ok(ServiceRegistry {
            user_service,
            token_service,
            cookie_config: self.cookie_config.unwrap_or_else(CookieConfig::from_env),
        })
    }
}
