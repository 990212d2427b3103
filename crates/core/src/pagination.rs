//! Page-number pagination helpers shared by list endpoints.

/// Page used when the client omits one or sends zero/negative.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the client omits one or sends zero/negative.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Hard ceiling on page size to keep a single query bounded.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a client-supplied page number to a valid 1-indexed page.
pub fn clamp_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p > 0 => p,
        _ => DEFAULT_PAGE,
    }
}

/// Clamp a client-supplied page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    match page_size {
        Some(s) if s > 0 => s.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Row offset for a 1-indexed page.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}
