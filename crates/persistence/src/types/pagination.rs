//! Page-number pagination.
//!
//! Clients address pages by number (`page`, 1-based) and size (`per_page`).
//! Storage works with a [`PageWindow`] (`LIMIT` / `OFFSET`), where
//! `offset = (page - 1) * per_page`.

use serde::{Deserialize, Serialize};

/// Default page size when the client gives none.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Upper bound on the page size unless configured otherwise.
pub const MAX_PER_PAGE: u32 = 1000;

/// A normalized page request. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Creates a page request, normalizing zero values to the defaults.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self::from_raw(Some(page as i64), Some(per_page as i64), DEFAULT_PER_PAGE, MAX_PER_PAGE)
    }

    /// Builds a page request from unchecked client values.
    ///
    /// A missing or non-positive `page` becomes 1; a missing or non-positive
    /// `per_page` becomes `default_per_page`. `per_page` is capped at
    /// `max_per_page`.
    pub fn from_raw(
        page: Option<i64>,
        per_page: Option<i64>,
        default_per_page: u32,
        max_per_page: u32,
    ) -> Self {
        let max_per_page = max_per_page.max(1);
        let default_per_page = default_per_page.clamp(1, max_per_page);

        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };
        let per_page = match per_page {
            Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX).min(max_per_page),
            _ => default_per_page,
        };

        Self { page, per_page }
    }

    /// Returns the 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the number of rows to skip.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Converts into a `LIMIT` / `OFFSET` window.
    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: self.per_page as u64,
            offset: self.offset(),
        }
    }
}

/// A `LIMIT` / `OFFSET` slice of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Maximum number of rows.
    pub limit: u64,
    /// Rows to skip.
    pub offset: u64,
}

impl PageWindow {
    /// Returns a window of the first `limit` rows.
    pub fn first(limit: u64) -> Self {
        Self { limit, offset: 0 }
    }
}
