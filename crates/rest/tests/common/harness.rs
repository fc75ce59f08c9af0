//! REST API test harness.
//!
//! Builds test servers over an in-memory SQLite backend seeded from
//! [`SITES_CSV`](super::fixtures::SITES_CSV).

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use heritage_persistence::backends::sqlite::SqliteBackend;
use heritage_persistence::import::read_sites_csv;
use heritage_rest::{ServerConfig, create_app_with_config};
use serde_json::Value;

use super::fixtures::SITES_CSV;

/// Creates an in-memory backend holding the fixture sites.
pub fn seeded_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");

    let import = read_sites_csv(SITES_CSV.as_bytes()).expect("Failed to parse fixture CSV");
    backend
        .replace_sites(&import.sites)
        .expect("Failed to seed sites");
    backend
}

/// Creates a test server over the seeded backend with the test profile.
pub fn create_test_server() -> TestServer {
    create_test_server_with(ServerConfig::for_testing())
}

/// Creates a test server over the seeded backend with a custom configuration.
pub fn create_test_server_with(config: ServerConfig) -> TestServer {
    let app = create_app_with_config(seeded_backend(), config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server directly from the router, bypassing the middleware.
pub fn create_router_server(config: ServerConfig) -> TestServer {
    let state = heritage_rest::AppState::new(Arc::new(seeded_backend()), config);
    let app = heritage_rest::routing::create_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Collects the `id_no` of every element of a JSON array.
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|site| site["id_no"].as_i64().expect("id_no missing"))
        .collect()
}

/// Collects the `properties.id` of every feature.
pub fn feature_ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|feature| feature["properties"]["id"].as_i64().expect("id missing"))
        .collect()
}
