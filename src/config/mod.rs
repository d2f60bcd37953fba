//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `.env.dev` / `.env.prod` 파일로 프로필별 값을 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 액세스/리프레시 토큰과 인증 쿠키 설정
//! - [`media_config`] - Cloudinary 미디어 업로드 설정
//!
//! ## 보안 원칙
//!
//! - 비밀키는 환경 변수로만 제공
//! - 개발용 기본값은 개발 환경에서만 사용
//! - 프로덕션에서 필수 비밀키가 누락되면 기동 단계에서 에러 반환
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let jwt_config = JwtConfig::from_env()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ORIGIN="https://app.example.com"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service"
//!
//! # 토큰
//! export ACCESS_TOKEN_SECRET="..."
//! export ACCESS_TOKEN_EXPIRY="1d"
//! export REFRESH_TOKEN_SECRET="..."
//! export REFRESH_TOKEN_EXPIRY="10d"
//!
//! # 선택
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export COOKIE_SECURE="true"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod media_config;

pub use data_config::*;
pub use auth_config::*;
pub use media_config::*;
