//! Site route configuration.
//!
//! Defines the routes of the site query API.

#[cfg(feature = "sqlite")]
use axum::routing::post;
use axum::{Router, routing::get};
use heritage_persistence::core::SiteStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates the site routes under `prefix`.
///
/// # Routes
///
/// - `GET {prefix}/` - Endpoint index
/// - `GET {prefix}/all` - Paginated listing
/// - `GET {prefix}/filter` - Filtered listing
/// - `GET {prefix}/detail/{site_id}` - Full record
/// - `GET {prefix}/countries`, `/regions`, `/categories` - Distinct values
/// - `GET {prefix}/sites-by-country/{country}` - Sites of one country
/// - `GET {prefix}/sites-by-criteria/{criterion}` - Sites meeting one criterion
/// - `GET {prefix}/sites-by-year/{year}` - Sites inscribed in one year
/// - `GET {prefix}/sites-in-danger` - Sites in danger
/// - `GET {prefix}/sites-transboundary` - Transboundary sites
/// - `GET {prefix}/criteria` - Criteria reference
/// - `GET {prefix}/stats` - Statistics
/// - `GET {prefix}/search` - Free-text search
/// - `GET {prefix}/geo` - GeoJSON features
/// - `POST {prefix}/upload` - CSV upload summary
pub fn site_routes<S>(prefix: &str) -> Router<AppState<S>>
where
    S: SiteStorage + 'static,
{
    let path = |suffix: &str| format!("{}{}", prefix, suffix);

    let router = Router::new()
        .route(&path(""), get(handlers::index_handler))
        .route(&path("/"), get(handlers::index_handler))
        .route(&path("/all"), get(handlers::all_sites_handler::<S>))
        .route(&path("/filter"), get(handlers::filter_handler::<S>))
        .route(
            &path("/detail/{site_id}"),
            get(handlers::detail_handler::<S>),
        )
        .route(&path("/countries"), get(handlers::countries_handler::<S>))
        .route(&path("/regions"), get(handlers::regions_handler::<S>))
        .route(&path("/categories"), get(handlers::categories_handler::<S>))
        .route(
            &path("/sites-by-country/{country}"),
            get(handlers::sites_by_country_handler::<S>),
        )
        .route(
            &path("/sites-by-criteria/{criterion}"),
            get(handlers::sites_by_criteria_handler::<S>),
        )
        .route(
            &path("/sites-by-year/{year}"),
            get(handlers::sites_by_year_handler::<S>),
        )
        .route(
            &path("/sites-in-danger"),
            get(handlers::sites_in_danger_handler::<S>),
        )
        .route(
            &path("/sites-transboundary"),
            get(handlers::sites_transboundary_handler::<S>),
        )
        .route(&path("/criteria"), get(handlers::criteria_handler))
        .route(&path("/stats"), get(handlers::stats_handler::<S>))
        .route(&path("/search"), get(handlers::search_handler::<S>))
        .route(&path("/geo"), get(handlers::geo_handler::<S>));

    #[cfg(feature = "sqlite")]
    let router = router.route(&path("/upload"), post(handlers::upload_handler));

    router
}
