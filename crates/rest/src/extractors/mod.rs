//! Axum extractors for site queries.
//!
//! - [`Pagination`] - `page` / `per_page`, normalized against the configuration
//! - [`FilterParams`] - Listing filters (substring matches)
//! - [`GeoParams`] - Map filters (exact matches, one criterion)
//! - [`SearchTerm`] - The required `q` of the free-text search
//!
//! All of them reject with a [`RestError`](crate::RestError), so a bad
//! parameter produces the usual JSON error body.

mod pagination;
mod params;
mod site_params;

pub use pagination::Pagination;
pub use site_params::{FilterParams, GeoParams, SearchTerm};
