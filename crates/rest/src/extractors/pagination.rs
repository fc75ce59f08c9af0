//! Pagination extractor.
//!
//! Extracts `page` and `per_page` from the query string and normalizes them
//! against the server's configured page sizes.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::{PageRequest, PageWindow};
use serde::Deserialize;

use super::params::parse_int;
use crate::error::RestError;
use crate::state::AppState;

/// Axum extractor for pagination parameters.
///
/// A missing or non-positive `page` becomes 1, a missing or non-positive
/// `per_page` becomes the configured default, and `per_page` is capped at the
/// configured maximum.
///
/// # Example
///
/// ```rust,ignore
/// use heritage_rest::extractors::Pagination;
///
/// async fn list_handler(pagination: Pagination) {
///     let window = pagination.window();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(PageRequest);

/// Query parameters for pagination.
#[derive(Debug, Deserialize)]
struct PaginationQuery {
    page: Option<String>,
    per_page: Option<String>,
}

impl Pagination {
    /// Wraps an already normalized page request.
    pub fn new(request: PageRequest) -> Self {
        Self(request)
    }

    /// Returns the normalized page request.
    pub fn request(&self) -> PageRequest {
        self.0
    }

    /// Returns the 1-based page number.
    pub fn page(&self) -> u32 {
        self.0.page()
    }

    /// Returns the page size.
    pub fn per_page(&self) -> u32 {
        self.0.per_page()
    }

    /// Returns the `LIMIT` / `OFFSET` window.
    pub fn window(&self) -> PageWindow {
        self.0.window()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self(PageRequest::default())
    }
}

impl<S> FromRequestParts<AppState<S>> for Pagination
where
    S: SiteStorage + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        let page = parse_int("page", query.page)?;
        let per_page = parse_int("per_page", query.per_page)?;

        Ok(Pagination(state.page_request(page, per_page)))
    }
}
