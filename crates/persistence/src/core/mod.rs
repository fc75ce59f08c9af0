//! Core storage traits and abstractions.
//!
//! - [`SiteStorage`] - Read-only queries over the site table

mod storage;

pub use storage::SiteStorage;
