//! 페이지네이션 도우미
//!
//! `(page, limit)`를 저장소 쿼리에 쓰는 `(skip, limit)`으로 변환합니다.

/// 기본 페이지 번호
pub const DEFAULT_PAGE: i64 = 1;
/// 기본 페이지 크기
pub const DEFAULT_LIMIT: i64 = 10;
/// 요청 한 번에 허용하는 최대 페이지 크기
pub const MAX_LIMIT: i64 = 100;

/// 저장소 계층에 전달되는 오프셋
///
/// `limit == 0`은 MongoDB와 같이 "제한 없음"을 뜻합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// 조건에 맞는 문서 전체
    pub const ALL: Page = Page { skip: 0, limit: 0 };
}

impl Default for Page {
    fn default() -> Self {
        paginate(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// `skip = (page - 1) * limit`
///
/// 범위 보정은 하지 않습니다. `page <= 0`이면 음수 skip이 나오므로
/// 호출자가 요청 단계에서 걸러야 합니다.
pub fn paginate(page: i64, limit: i64) -> Page {
    Page {
        skip: (page - 1).saturating_mul(limit),
        limit,
    }
}
