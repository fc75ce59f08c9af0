//! Endpoint index handler.

use axum::Json;
use serde_json::{Value, json};

/// Handler for the API index.
///
/// Lists the site endpoints so clients can discover them.
///
/// # HTTP Request
///
/// `GET /sites/`
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Heritage Sites API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "all_sites": "/sites/all",
            "filter_sites": "/sites/filter",
            "site_detail": "/sites/detail/{site_id}",
            "countries": "/sites/countries",
            "regions": "/sites/regions",
            "categories": "/sites/categories",
            "sites_by_country": "/sites/sites-by-country/{country}",
            "sites_by_criteria": "/sites/sites-by-criteria/{criterion}",
            "sites_by_year": "/sites/sites-by-year/{year}",
            "sites_in_danger": "/sites/sites-in-danger",
            "transboundary_sites": "/sites/sites-transboundary",
            "criteria_info": "/sites/criteria",
            "statistics": "/sites/stats",
            "search": "/sites/search?q={search_term}",
            "geo_data": "/sites/geo",
            "upload": "/sites/upload"
        }
    }))
}
