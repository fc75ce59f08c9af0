//! Test infrastructure for the persistence layer.

pub mod fixtures;

pub use fixtures::*;

use heritage_persistence::backends::sqlite::SqliteBackend;

/// Creates an in-memory backend with the schema and no rows.
pub fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

/// Creates an in-memory backend loaded with [`heritage_sites`].
pub fn seeded_backend() -> SqliteBackend {
    let backend = create_backend();
    backend
        .replace_sites(&heritage_sites())
        .expect("Failed to load fixtures");
    backend
}
