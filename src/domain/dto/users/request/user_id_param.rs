//! 사용자 ID 경로 파라미터
use serde::{Deserialize, Serialize};

/// `/users/{id}` 경로의 파라미터
///
/// 검증 시점에 존재하는 사용자 ID 임이 확인된 값입니다. 이후 핸들러 실행 전에
/// 다른 요청이 사용자를 삭제할 수 있으므로, 핸들러는 여전히 부재를 처리해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdParam {
    pub id: String,
}
