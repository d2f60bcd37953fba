//! # Repository Layer
//!
//! 데이터 접근 계층입니다. 서비스는 `Arc<dyn UserRepository>`를 통해서만 저장소에 접근합니다.

pub mod users;
