//! 계정 서비스 백엔드
//!
//! 회원가입(아바타/커버 이미지 업로드 포함), 로그인/로그아웃, 액세스/리프레시 토큰
//! 발급과 회전, 비밀번호 변경, 프로필 수정을 제공하는 Rust 기반 사용자 계정 서비스입니다.
//!
//! # Features
//!
//! - **계정 관리**: multipart 회원가입, 프로필/아바타/커버 이미지 수정
//! - **JWT 인증**: 서로 다른 비밀키로 서명된 액세스/리프레시 토큰
//! - **토큰 회전**: 사용자당 하나의 리프레시 토큰만 유효, 재사용 시 거부
//! - **MongoDB**: 사용자 문서 영속화, username/email unique 인덱스
//! - **Cloudinary**: 서명 업로드 API를 통한 미디어 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/v1/users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 보호된 엔드포인트의 액세스 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출, 쿠키, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService, TokenService, MediaUploader
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository (MongoDB / in-memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::core::ServiceRegistry;
//! use account_service_backend::repositories::users::InMemoryUserRepository;
//!
//! let registry = ServiceRegistry::builder()
//!     .user_repository(Arc::new(InMemoryUserRepository::new()))
//!     .media_uploader(uploader)
//!     .jwt_config(JwtConfig::new("access", 900, "refresh", 86_400))
//!     .build()?;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(registry))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
