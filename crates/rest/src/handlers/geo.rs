//! GeoJSON map data handler.

use axum::{Json, extract::State};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::GeoFeature;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::GeoParams;
use crate::state::AppState;

/// Handler for map features.
///
/// Returns one GeoJSON point feature per matching site that has both
/// coordinates. `country`, `region` and `category` must match exactly;
/// `criteria` takes a single code.
///
/// # HTTP Request
///
/// `GET /sites/geo?country&region&category&criteria&danger&transboundary`
pub async fn geo_handler<S>(
    State(state): State<AppState<S>>,
    params: GeoParams,
) -> RestResult<Json<Vec<GeoFeature>>>
where
    S: SiteStorage + 'static,
{
    debug!(params = ?params, "Processing geo request");

    let features = state.storage().geo_features(&params.into_filter()).await?;

    debug!(features = features.len(), "Geo features built");
    Ok(Json(features))
}
