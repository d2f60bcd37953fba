//! # Authentication Middleware
//!
//! 보호된 엔드포인트 앞에서 액세스 토큰을 검증하는 Actix-web 미들웨어입니다.
//!
//! ## 토큰 추출 순서
//!
//! 1. `accessToken` 쿠키
//! 2. `Authorization: Bearer <token>` 헤더
//!
//! 검증에 성공하면 저장소에서 조회한 사용자를 [`AuthenticatedUser`]로 요청 extensions에
//! 저장하고, 실패하면 핸들러를 호출하지 않고 401 에러 봉투로 응답합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[post("/logout", wrap = "AuthMiddleware")]
//! async fn logout(user: AuthenticatedUser) -> Result<HttpResponse, AppError> { ... }
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 필수 미들웨어
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
