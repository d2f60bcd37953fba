//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 문서와 매핑되는 영속 엔티티 (User)
//! ├── dto        - 요청/응답 데이터 전송 객체
//! └── models     - 토큰 클레임, 인증 사용자, 업로드 파일 등 값 객체
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, 외부 미디어 서비스)
//! ```
//!
//! 엔티티는 저장 형식을, DTO는 API 계약을 표현합니다. 둘을 분리하여
//! 비밀번호 해시와 리프레시 토큰이 응답으로 새어 나가지 않도록 합니다.

pub mod entities;
pub mod dto;
pub mod models;
