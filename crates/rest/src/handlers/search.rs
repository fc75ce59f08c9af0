//! Free-text search handler.

use axum::{Json, extract::State};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::{PageWindow, SearchScope, SiteFilter, SiteQuery, SiteSummary};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::SearchTerm;
use crate::state::AppState;

/// Handler for the free-text search.
///
/// Matches the term as a case-insensitive substring of the names,
/// descriptions, justifications, country and region. Results are capped at
/// the configured search limit.
///
/// # HTTP Request
///
/// `GET /sites/search?q=`
///
/// # Response
///
/// - `200 OK` - Array of summaries
/// - `400 Bad Request` - `q` is missing or blank
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    SearchTerm(term): SearchTerm,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!(q = %term, "Processing search request");

    let query = SiteQuery::new(SiteFilter::new().with_search(term, SearchScope::FullText))
        .paginate(PageWindow::first(state.search_limit() as u64));
    let sites = state.storage().find_sites(&query).await?;

    debug!(returned = sites.len(), "Search complete");
    Ok(Json(sites))
}
