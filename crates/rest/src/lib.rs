//! # heritage-rest - World Heritage Sites HTTP API
//!
//! This crate serves the UNESCO World Heritage Sites table over HTTP: filtered
//! and paginated listings, full-record lookups, distinct-value lists,
//! summary statistics, free-text search, GeoJSON map features, and a CSV
//! upload path that summarizes a file without storing it.
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use heritage_rest::{create_app_with_config, ServerConfig};
//! use heritage_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a storage backend
//!     let backend = SqliteBackend::open("sites_xlsx_export.db")?;
//!     backend.init_schema()?;
//!
//!     // Configure the server
//!     let config = ServerConfig::default();
//!
//!     // Create the Axum application
//!     let app = create_app_with_config(backend, config);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | index | GET | `/sites/` |
//! | list | GET | `/sites/all?page&per_page` |
//! | filter | GET | `/sites/filter?country&region&category&danger&year_from&year_to&search&criteria&transboundary&page&per_page` |
//! | detail | GET | `/sites/detail/{site_id}` |
//! | distinct values | GET | `/sites/countries`, `/sites/regions`, `/sites/categories` |
//! | by country | GET | `/sites/sites-by-country/{country}` |
//! | by criterion | GET | `/sites/sites-by-criteria/{criterion}` |
//! | by year | GET | `/sites/sites-by-year/{year}` |
//! | in danger | GET | `/sites/sites-in-danger` |
//! | transboundary | GET | `/sites/sites-transboundary` |
//! | criteria reference | GET | `/sites/criteria` |
//! | statistics | GET | `/sites/stats` |
//! | search | GET | `/sites/search?q=` |
//! | map features | GET | `/sites/geo?country&region&category&criteria&danger&transboundary` |
//! | upload summary | POST | `/sites/upload` |
//! | health | GET | `/health` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"status", "error", "detail"}` JSON bodies:
//!
//! | HTTP Status | Error Code | Description |
//! |-------------|------------|-------------|
//! | 400 | bad-request | Unparsable parameter, unknown criterion, unsupported upload |
//! | 404 | not-found | No site with the requested ID |
//! | 500 | internal-error | Storage failure or malformed upload |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Query-string extractors
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use heritage_persistence::core::SiteStorage;
use http::header::{CONTENT_RANGE, RANGE};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust,ignore
/// use heritage_rest::create_app;
/// use heritage_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let app = create_app(backend);
/// ```
pub fn create_app<S>(storage: S) -> Router
where
    S: SiteStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up every route group together with tracing, the request timeout,
/// the body size limit and, when enabled, CORS.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: SiteStorage + 'static,
{
    info!(
        "Creating heritage API server with backend: {}",
        storage.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().expose_headers([CONTENT_RANGE, RANGE]);

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| parse_cors_entry("origin", s))
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| parse_cors_entry("method", s))
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| parse_cors_entry("header", s))
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

fn parse_cors_entry<T: std::str::FromStr>(kind: &str, entry: &str) -> Option<T> {
    let entry = entry.trim();
    match entry.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(kind, entry, "Ignoring unparsable CORS entry");
            None
        }
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// the level when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "heritage_rest={level},heritage_persistence={level},heritage={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
