//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! JSON 본문은 모두 camelCase를 사용합니다.
//!
//! ```text
//! dto/
//! ├── api_response.rs        # 성공 응답 봉투 {statusCode, data, message, success}
//! └── users/
//!     ├── request/           # 클라이언트 → 서버
//!     │   ├── register_request.rs   # multipart 회원가입, 아바타/커버 이미지 폼
//!     │   ├── auth_request.rs       # 로그인, 토큰 갱신
//!     │   └── account_request.rs    # 비밀번호 변경, 계정 정보 수정
//!     └── response/          # 서버 → 클라이언트
//!         └── user_response.rs      # 민감 정보가 제거된 사용자, 토큰 응답
//! ```
//!
//! ## 설계 원칙
//!
//! - **내부 표현과 외부 표현 분리**: `User` 엔티티는 절대 직접 직렬화하지 않습니다.
//! - **필수 입력 검증은 서비스 계층에서**: 요청 DTO의 필드는 대부분 `Option`이며,
//!   누락/공백 여부는 `UserService`가 판단하여 `ValidationError`를 반환합니다.
//! - **형식 검증은 `validator`로**: 이메일 형식 등은 `#[derive(Validate)]`로 선언합니다.

pub mod api_response;
pub mod users;

pub use api_response::ApiResponse;
