//! HTTP request handlers for the site endpoints.
//!
//! - [`index`] - Endpoint index
//! - [`listing`] - Paginated and filtered summary listings
//! - [`detail`] - Full record by `id_no`
//! - [`lookups`] - Distinct countries, regions, categories and the criteria reference
//! - [`stats`] - Summary statistics
//! - [`search`] - Free-text search
//! - [`geo`] - GeoJSON map features
//! - [`upload`] - CSV upload summary
//! - [`health`] - Health check endpoint

pub mod detail;
pub mod geo;
pub mod health;
pub mod index;
pub mod listing;
pub mod lookups;
pub mod search;
pub mod stats;
#[cfg(feature = "sqlite")]
pub mod upload;

// Re-export handlers for convenience
pub use detail::detail_handler;
pub use geo::geo_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use listing::{
    all_sites_handler, filter_handler, sites_by_country_handler, sites_by_criteria_handler,
    sites_by_year_handler, sites_in_danger_handler, sites_transboundary_handler,
};
pub use lookups::{categories_handler, countries_handler, criteria_handler, regions_handler};
pub use search::search_handler;
pub use stats::stats_handler;
#[cfg(feature = "sqlite")]
pub use upload::upload_handler;

use crate::error::RestError;

/// Parses an integer path segment.
pub(crate) fn parse_path_int(name: &str, value: &str) -> Result<i64, RestError> {
    value.trim().parse().map_err(|_| RestError::BadRequest {
        message: format!("Path parameter '{}' must be an integer, got '{}'", name, value),
    })
}
