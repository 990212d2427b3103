//! Response envelopes shared by every handler.
//!
//! Success bodies always nest their payload under a `data` key. Routing
//! everything through [`DataResponse`] keeps that shape typed instead of
//! scattering `json!` literals across handlers.

use serde::Serialize;

/// The `{ "data": T }` wrapper around a successful payload.
///
/// ```ignore
/// Ok(Json(DataResponse { data: article }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Page of results plus the filter-wide row count.
///
/// List handlers wrap this in [`DataResponse`] like any other payload.
/// `total` counts every row matching the filter, not the page length.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
