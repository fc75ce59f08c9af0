//! Core types for the persistence layer.
//!
//! - [`Site`], [`SiteSummary`] - Full records and the listing projection
//! - [`Criterion`], [`CriteriaFlags`] - The ten UNESCO selection criteria
//! - [`SiteFilter`], [`SiteQuery`] - Optional filter criteria and listing requests
//! - [`PageRequest`], [`PageWindow`] - Page-number pagination
//! - [`SiteStatistics`], [`CountMap`] - Aggregates
//! - [`GeoFeature`] - GeoJSON point features
//!
//! # Building a Listing Query
//!
//! ```
//! use heritage_persistence::types::{PageRequest, SiteFilter, SiteOrder, SiteQuery};
//!
//! let filter = SiteFilter::new()
//!     .with_region_containing("europe")
//!     .with_danger(false)
//!     .with_years(Some(1980), Some(1999));
//!
//! let query = SiteQuery::new(filter)
//!     .ordered_by(SiteOrder::Table)
//!     .paginate(PageRequest::new(2, 50).window());
//!
//! assert_eq!(query.window.unwrap().offset, 50);
//! ```

mod criterion;
mod filter;
mod geo;
mod pagination;
mod site;
mod statistics;

pub use criterion::{CriteriaFlags, Criterion, CriterionKind};
pub use filter::{SearchScope, SiteFilter, SiteOrder, SiteQuery, TextMatch, TextSearch};
pub use geo::{GeoFeature, GeoProperties, PointGeometry};
pub use pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE, PageRequest, PageWindow};
pub use site::{DistinctField, Site, SiteSummary};
pub use statistics::{CountMap, SiteStatistics, decade_label};
