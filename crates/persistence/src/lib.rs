//! World Heritage Sites persistence layer.
//!
//! This crate owns everything that touches the site table: the domain types,
//! the [`SiteStorage`](core::SiteStorage) trait that the HTTP layer talks to,
//! and the SQLite backend that implements it.
//!
//! # Architecture
//!
//! - [`types`] - Site records, projections, filters, pagination, statistics
//!   and GeoJSON features
//! - [`error`] - Error types for all operations
//! - [`core`] - The read-only storage trait
//! - [`import`] - CSV parsing into site records
//! - [`backends`] - Backend implementations (SQLite)
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use heritage_persistence::backends::sqlite::SqliteBackend;
//! use heritage_persistence::core::SiteStorage;
//! use heritage_persistence::types::{PageRequest, SiteFilter, SiteQuery};
//!
//! let backend = SqliteBackend::open("sites_xlsx_export.db")?;
//! backend.init_schema()?;
//!
//! let filter = SiteFilter::new()
//!     .with_country_containing("italy")
//!     .with_criteria_list("c1,c4");
//! let query = SiteQuery::new(filter).paginate(PageRequest::new(1, 20).window());
//! let sites = backend.find_sites(&query).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Filtering
//!
//! Every filter criterion is optional. Supplied criteria are combined with
//! `AND`; the free-text search term is matched with `OR` across its columns.
//! Client input is always bound as a statement parameter, never spliced into
//! the SQL text.
//!
//! ```
//! use heritage_persistence::types::{Criterion, SiteFilter};
//!
//! let filter = SiteFilter::new()
//!     .with_danger(true)
//!     .with_criteria_list("c1, n7, zz9");
//!
//! // Malformed tokens are dropped.
//! assert_eq!(filter.criteria, vec![Criterion::C1, Criterion::N7]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod import;
pub mod types;

pub use error::{StorageError, StorageResult};
