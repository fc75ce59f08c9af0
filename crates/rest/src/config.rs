//! Server configuration for the World Heritage Sites API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HERITAGE_SERVER_PORT` | 8080 | Server port |
//! | `HERITAGE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `HERITAGE_LOG_LEVEL` | info | Log level |
//! | `HERITAGE_MAX_BODY_SIZE` | 10485760 | Max request body (bytes) |
//! | `HERITAGE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `HERITAGE_ENABLE_CORS` | true | Enable CORS |
//! | `HERITAGE_CORS_ORIGINS` | http://localhost,http://localhost:8000,http://localhost:8080 | Allowed origins |
//! | `HERITAGE_CORS_METHODS` | * | Allowed methods |
//! | `HERITAGE_CORS_HEADERS` | * | Allowed headers |
//! | `HERITAGE_DATABASE_URL` | sites_xlsx_export.db | SQLite database file |
//! | `HERITAGE_IMPORT_CSV` | (unset) | CSV file loaded at startup |
//! | `HERITAGE_DEFAULT_PAGE_SIZE` | 100 | Default page size |
//! | `HERITAGE_MAX_PAGE_SIZE` | 1000 | Maximum page size |
//! | `HERITAGE_SEARCH_LIMIT` | 100 | Maximum search results |
//!
//! # Example
//!
//! ```rust
//! use heritage_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use clap::Parser;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost,http://localhost:8000,http://localhost:8080";

/// Server configuration for the World Heritage Sites API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "heritage")]
#[command(about = "World Heritage Sites query service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "HERITAGE_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HERITAGE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "HERITAGE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "HERITAGE_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "HERITAGE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "HERITAGE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "HERITAGE_CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "HERITAGE_CORS_METHODS", default_value = "*")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "HERITAGE_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// SQLite database file, or `:memory:`.
    #[arg(long, env = "HERITAGE_DATABASE_URL", default_value = "sites_xlsx_export.db")]
    pub database_url: String,

    /// CSV export to load into the site table at startup, replacing its rows.
    #[arg(long, env = "HERITAGE_IMPORT_CSV")]
    pub import_csv: Option<PathBuf>,

    /// Default page size for listings.
    #[arg(long, env = "HERITAGE_DEFAULT_PAGE_SIZE", default_value = "100")]
    pub default_page_size: u32,

    /// Maximum page size for listings.
    #[arg(long, env = "HERITAGE_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: u32,

    /// Maximum number of free-text search results.
    #[arg(long, env = "HERITAGE_SEARCH_LIMIT", default_value = "100")]
    pub search_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: DEFAULT_CORS_ORIGINS.to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: "sites_xlsx_export.db".to_string(),
            import_csv: None,
            default_page_size: 100,
            max_page_size: 1000,
            search_limit: 100,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["heritage"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.search_limit == 0 {
            errors.push("Search limit cannot be 0".to_string());
        }

        if self.database_url.trim().is_empty() {
            errors.push("Database URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database and small page
    /// sizes.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: ":memory:".to_string(),
            import_csv: None,
            default_page_size: 5,
            max_page_size: 50,
            search_limit: 3,
        }
    }
}
