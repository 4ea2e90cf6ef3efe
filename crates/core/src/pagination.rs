//! Result ordering and page slicing for catalog listings.
//!
//! Listing results are ordered newest-first by creation time with the id as
//! a deterministic tiebreak, then sliced into contiguous pages. A page past
//! the end of the result set yields an empty list, never an error.

use serde::Serialize;

use crate::rating::average_rating;
use crate::recipe::Recipe;

/// Default number of recipes per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Maximum number of recipes per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Size of the fixed "popular" slice (no further pagination).
pub const POPULAR_LIMIT: usize = 12;

/// A normalized page request. Construct via [`PageRequest::new`] so
/// out-of-range input collapses to the defaults.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Normalize raw pagination input: pages below 1 become 1, a missing or
    /// non-positive page size becomes [`DEFAULT_PAGE_SIZE`], and oversized
    /// page sizes are clamped to [`MAX_PAGE_SIZE`].
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1).min(i64::from(u32::MAX)) as u32;
        let page_size = match page_size {
            Some(size) if size > 0 => size.min(i64::from(MAX_PAGE_SIZE)) as u32,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    fn offset(self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Total number of matching records across all pages.
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of results plus its metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Slice `[(page-1)*size, page*size)` out of an already-ordered result set.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let total_pages = total.div_ceil(request.page_size as usize) as u32;

    let info = PageInfo {
        total: total as u64,
        total_pages,
        page: request.page,
        page_size: request.page_size,
        has_next: request.page < total_pages,
        // With no results there is no previous page, whatever was requested.
        has_prev: total > 0 && request.page > 1,
    };

    let items = items
        .into_iter()
        .skip(request.offset())
        .take(request.page_size as usize)
        .collect();

    Page { items, info }
}

/// Order recipes by creation time, most recent first, ties broken by id
/// descending for determinism.
pub fn sort_newest_first(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Order recipes by current average rating descending (recomputed, not
/// cached), then by creation time descending.
pub fn sort_top_rated(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| {
        average_rating(&b.ratings)
            .total_cmp(&average_rating(&a.ratings))
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });
}
