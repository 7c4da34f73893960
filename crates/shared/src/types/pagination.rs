//! Pagination types for list endpoints.
//!
//! Page and page-size arrive as untrusted query strings. They are resolved
//! into a [`PageWindow`] that never fails: unparseable values fall back to
//! the caller's defaults, the page is clamped to at least 1 and the page size
//! to at most [`MAX_PAGE_SIZE`].

use serde::{Deserialize, Serialize};

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 500;

/// A resolved offset/limit window for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Number of rows to skip.
    pub offset: i64,
    /// Requested page size, at most [`MAX_PAGE_SIZE`].
    ///
    /// There is no lower clamp: zero yields empty pages and a negative size
    /// disables the limit entirely.
    pub limit: i64,
    /// Current page number (1-indexed).
    pub page: i64,
}

/// Resolves raw page/page-size query values into a [`PageWindow`].
#[must_use]
pub fn resolve_pagination(
    raw_page_size: &str,
    default_size: i64,
    raw_page: &str,
    default_page: i64,
) -> PageWindow {
    let page = raw_page.parse::<i64>().unwrap_or(default_page).max(1);
    let limit = raw_page_size
        .parse::<i64>()
        .unwrap_or(default_size)
        .min(MAX_PAGE_SIZE);

    PageWindow {
        offset: (page - 1).saturating_mul(limit),
        limit,
        page,
    }
}

impl PageWindow {
    /// Returns the offset for database queries.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::try_from(self.offset).unwrap_or(0)
    }

    /// Returns the limit for database queries, or `None` when unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        u64::try_from(self.limit).ok()
    }

    /// Number of pages needed to show `total` rows with this window.
    #[must_use]
    pub fn total_pages(&self, total: u64) -> u64 {
        match self.limit() {
            Some(0) | None => u64::from(total > 0),
            Some(limit) => total.div_ceil(limit),
        }
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta_data: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: i64,
    /// Items per page.
    pub page_size: i64,
    /// Total number of records, ignoring any active filters.
    pub total_records: u64,
    /// Total number of pages.
    pub total_page: u64,
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, window: PageWindow, total_records: u64) -> Self {
        Self {
            data,
            meta_data: PageMeta {
                page: window.page,
                page_size: window.limit,
                total_records,
                total_page: window.total_pages(total_records),
            },
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
