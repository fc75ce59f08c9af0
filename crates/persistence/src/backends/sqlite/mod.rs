//! SQLite backend implementation.
//!
//! Serves the site table from a SQLite file (or an in-memory database for
//! tests and uploads) through an `r2d2` connection pool.
//!
//! # Example
//!
//! ```no_run
//! use heritage_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("sites_xlsx_export.db")?;
//! backend.init_schema()?;
//! backend.import_csv("whc-sites.csv")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE sites_xlsx_export (
//!     unique_number INTEGER,
//!     id_no INTEGER,
//!     name_en TEXT NOT NULL,
//!     -- descriptive, geospatial and classification columns
//!     c1 INTEGER, -- ... through n10
//!     states_name_en TEXT NOT NULL,
//!     region_en TEXT,
//!     transboundary INTEGER
//! );
//! ```
//!
//! Listings are ordered by `rowid`, so table order is insertion order.

mod backend;
mod query_builder;
mod schema;
mod stats;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use query_builder::{SiteQueryBuilder, SqlFragment, SqlParam, escape_like};
pub use schema::{SCHEMA_VERSION, SITE_TABLE};
