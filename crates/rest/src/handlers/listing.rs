//! Summary listing handlers.
//!
//! Every handler here returns a JSON array of site summaries. Paginated
//! listings are in table order; the per-country listing is sorted by name.

use axum::{
    Json,
    extract::{Path, State},
};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::{Criterion, SiteFilter, SiteOrder, SiteQuery, SiteSummary};
use tracing::debug;

use super::parse_path_int;
use crate::error::RestResult;
use crate::extractors::{FilterParams, Pagination};
use crate::state::AppState;

async fn paginated<S>(
    state: &AppState<S>,
    filter: SiteFilter,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    let query = SiteQuery::new(filter).paginate(pagination.window());
    let sites = state.storage().find_sites(&query).await?;

    debug!(
        page = pagination.page(),
        per_page = pagination.per_page(),
        returned = sites.len(),
        "Listing complete"
    );

    Ok(Json(sites))
}

/// Handler for the unfiltered listing.
///
/// # HTTP Request
///
/// `GET /sites/all?page&per_page`
pub async fn all_sites_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!(page = pagination.page(), "Processing all-sites request");
    paginated(&state, SiteFilter::new(), pagination).await
}

/// Handler for the filtered listing.
///
/// All supplied filters are ANDed. `country`, `region` and `category` match
/// case-insensitive substrings; `search` matches names and short
/// descriptions; unrecognized `criteria` codes are ignored.
///
/// # HTTP Request
///
/// `GET /sites/filter?country&region&category&danger&year_from&year_to&search&criteria&transboundary&page&per_page`
///
/// # Response
///
/// - `200 OK` - Possibly empty array of summaries
/// - `400 Bad Request` - A boolean or integer parameter did not parse
pub async fn filter_handler<S>(
    State(state): State<AppState<S>>,
    params: FilterParams,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!(params = ?params, "Processing filter request");
    paginated(&state, params.into_filter(), pagination).await
}

/// Handler for the per-country listing.
///
/// Matches the country name exactly and sorts by site name. Not paginated.
///
/// # HTTP Request
///
/// `GET /sites/sites-by-country/{country}`
pub async fn sites_by_country_handler<S>(
    State(state): State<AppState<S>>,
    Path(country): Path<String>,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!(country = %country, "Processing sites-by-country request");

    let query = SiteQuery::new(SiteFilter::new().with_country(country)).ordered_by(SiteOrder::Name);
    let sites = state.storage().find_sites(&query).await?;

    Ok(Json(sites))
}

/// Handler for sites satisfying one criterion.
///
/// # HTTP Request
///
/// `GET /sites/sites-by-criteria/{criterion}?page&per_page`
///
/// # Response
///
/// - `200 OK` - Array of summaries
/// - `400 Bad Request` - The code is not one of `c1`..`c6`, `n7`..`n10`
pub async fn sites_by_criteria_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!(criterion = %code, "Processing sites-by-criteria request");

    let criterion: Criterion = code.parse()?;
    paginated(&state, SiteFilter::new().with_criterion(criterion), pagination).await
}

/// Handler for sites inscribed in a given year.
///
/// # HTTP Request
///
/// `GET /sites/sites-by-year/{year}?page&per_page`
pub async fn sites_by_year_handler<S>(
    State(state): State<AppState<S>>,
    Path(year): Path<String>,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    let year = parse_path_int("year", &year)?;
    debug!(year, "Processing sites-by-year request");

    paginated(&state, SiteFilter::new().inscribed_in(year), pagination).await
}

/// Handler for sites on the List of World Heritage in Danger.
///
/// # HTTP Request
///
/// `GET /sites/sites-in-danger?page&per_page`
pub async fn sites_in_danger_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!("Processing sites-in-danger request");
    paginated(&state, SiteFilter::new().with_danger(true), pagination).await
}

/// Handler for sites spanning more than one country.
///
/// # HTTP Request
///
/// `GET /sites/sites-transboundary?page&per_page`
pub async fn sites_transboundary_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
) -> RestResult<Json<Vec<SiteSummary>>>
where
    S: SiteStorage + 'static,
{
    debug!("Processing sites-transboundary request");
    paginated(&state, SiteFilter::new().with_transboundary(true), pagination).await
}
