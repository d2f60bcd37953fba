//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 토큰 클레임, 인증 사용자 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 `serde`로 BSON 직렬화되며 `_id`는 `Option<ObjectId>`로 표현됩니다.
//! 삽입 전에는 `None`, 저장소에서 읽어온 뒤에는 항상 `Some`입니다.

pub mod users;
