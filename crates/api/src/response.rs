//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; paginated listings
//! add a `"page"` block with the pagination metadata.

use serde::Serialize;

use ladle_core::pagination::PageInfo;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated `{ "data": [...], "page": {...} }` response envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub page: PageInfo,
}
