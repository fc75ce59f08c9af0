//! Site detail handler.

use axum::{
    Json,
    extract::{Path, State},
};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::Site;
use tracing::debug;

use super::parse_path_int;
use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the detail lookup.
///
/// Returns every column of the site whose `id_no` matches. When several rows
/// share the number, the first in table order is returned.
///
/// # HTTP Request
///
/// `GET /sites/detail/{site_id}`
///
/// # Response
///
/// - `200 OK` - The full record
/// - `400 Bad Request` - `site_id` is not an integer
/// - `404 Not Found` - No site has that number
pub async fn detail_handler<S>(
    State(state): State<AppState<S>>,
    Path(site_id): Path<String>,
) -> RestResult<Json<Site>>
where
    S: SiteStorage + 'static,
{
    let id_no = parse_path_int("site_id", &site_id)?;
    debug!(id_no, "Processing detail request");

    match state.storage().get_site(id_no).await? {
        Some(site) => Ok(Json(site)),
        None => {
            debug!(id_no, "Site not found");
            Err(RestError::site_not_found(id_no))
        }
    }
}
