//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 전달하는 응답 형태를 정의합니다.
//!
//! - **데이터 은닉**: 비밀번호, 서버 발급 토큰은 응답에서 제외
//! - **일관성**: 요청 DTO 와 같은 camelCase 필드명 사용
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
//!   "username": "ada",
//!   "firstName": "Ada",
//!   "lastName": "Lovelace",
//!   "email": "ada@example.com",
//!   "role": "user",
//!   "imgUrl": "",
//!   "createdAt": "2024-06-01T10:00:00Z",
//!   "updatedAt": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, LoginAcceptedResponse, UserResponse};
