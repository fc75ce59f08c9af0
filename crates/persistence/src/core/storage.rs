//! Core site storage trait.
//!
//! This module defines the [`SiteStorage`] trait, the read-only interface the
//! HTTP layer uses to query the site table.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{
    DistinctField, GeoFeature, Site, SiteFilter, SiteQuery, SiteStatistics, SiteSummary,
};

/// Read access to World Heritage Site records.
///
/// Implementations own their connection handling. Every method is a single
/// independent read; nothing is cached between calls.
///
/// # Example
///
/// ```ignore
/// use heritage_persistence::core::SiteStorage;
/// use heritage_persistence::types::{SiteFilter, SiteQuery, PageRequest};
///
/// async fn example<S: SiteStorage>(storage: &S) -> Result<(), StorageError> {
///     let query = SiteQuery::new(SiteFilter::new().with_danger(true))
///         .paginate(PageRequest::new(1, 10).window());
///     for site in storage.find_sites(&query).await? {
///         println!("{} ({})", site.name_en, site.states_name_en);
///     }
///
///     if let Some(site) = storage.get_site(26).await? {
///         println!("{:?}", site.criteria_flags());
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait SiteStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Verifies the store answers a trivial query.
    async fn health_check(&self) -> StorageResult<()>;

    /// Returns the summary projection of every site matching the query, in the
    /// query's order and restricted to its page window.
    async fn find_sites(&self, query: &SiteQuery) -> StorageResult<Vec<SiteSummary>>;

    /// Returns the full record of the first site with the given `id_no`.
    ///
    /// `id_no` is not guaranteed unique; the row that comes first in table
    /// order wins.
    async fn get_site(&self, id_no: i64) -> StorageResult<Option<Site>>;

    /// Returns the distinct non-null values of a column, sorted ascending.
    async fn distinct_values(&self, field: DistinctField) -> StorageResult<Vec<String>>;

    /// Computes the summary statistics over the whole table.
    async fn statistics(&self) -> StorageResult<SiteStatistics>;

    /// Returns one point feature for every matching site that has both
    /// coordinates.
    async fn geo_features(&self, filter: &SiteFilter) -> StorageResult<Vec<GeoFeature>>;
}
