//! World Heritage Sites server.
//!
//! Serves the UNESCO World Heritage Sites table over HTTP.

use clap::Parser;
use heritage_rest::{ServerConfig, init_logging};
use tracing::info;
#[cfg(feature = "sqlite")]
use tracing::warn;

#[cfg(feature = "sqlite")]
use heritage_persistence::backends::sqlite::SqliteBackend;
#[cfg(feature = "sqlite")]
use heritage_rest::create_app_with_config;

/// Opens the SQLite database, creates the table if needed and runs the
/// optional startup import.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    info!(database = %config.database_url, "Initializing SQLite backend");

    let backend = SqliteBackend::open(&config.database_url)?;
    backend.init_schema()?;

    if let Some(path) = &config.import_csv {
        let rows = backend.import_csv(path)?;
        info!(path = %path.display(), rows, "Loaded startup CSV");
    } else if backend.is_memory() {
        warn!("In-memory database without HERITAGE_IMPORT_CSV; the site table is empty");
    }

    Ok(backend)
}

/// Starts the Axum HTTP server.
#[cfg(feature = "sqlite")]
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        database = %config.database_url,
        "Starting World Heritage Sites server"
    );

    start(config).await
}

#[cfg(feature = "sqlite")]
async fn start(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

#[cfg(not(feature = "sqlite"))]
async fn start(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The server requires the 'sqlite' feature. \
         Build with: cargo build -p heritage --features sqlite"
    )
}
