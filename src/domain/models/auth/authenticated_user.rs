//! 인증된 사용자 추출기
//!
//! `AuthMiddleware`가 액세스 토큰 검증에 성공하면 요청 extensions에
//! [`AuthenticatedUser`]를 저장하고, 핸들러는 이를 인자로 받아 사용합니다.
//!
//! ```rust,ignore
//! #[get("/current-user", wrap = "AuthMiddleware")]
//! async fn current_user(user: AuthenticatedUser) -> impl Responder {
//!     HttpResponse::Ok().json(ApiResponse::ok(user.user, "User fetched successfully"))
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::core::errors::AppError;
use crate::domain::dto::users::response::UserResponse;

/// 미들웨어가 확인한 요청 주체
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    /// 요청 시점에 저장소에서 조회한 사용자 (민감 정보 제외)
    pub user: UserResponse,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(
                AppError::AuthenticationError("Unauthorized request".to_string()).into()
            )),
        }
    }
}
