//! Statistics handler.

use axum::{Json, extract::State};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::SiteStatistics;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the summary statistics.
///
/// Computed over the whole table; no filters apply.
///
/// # HTTP Request
///
/// `GET /sites/stats`
pub async fn stats_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<SiteStatistics>>
where
    S: SiteStorage + 'static,
{
    debug!("Processing statistics request");

    let stats = state.storage().statistics().await?;

    debug!(total_sites = stats.total_sites, "Statistics computed");
    Ok(Json(stats))
}
