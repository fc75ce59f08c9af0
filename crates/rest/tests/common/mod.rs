//! Common test utilities for REST API testing.
//!
//! - [`fixtures`] - A small CSV export of sites
//! - [`harness`] - Test servers over seeded backends

pub mod fixtures;
pub mod harness;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use harness::*;
