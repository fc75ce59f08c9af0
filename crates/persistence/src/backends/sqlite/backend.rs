//! SQLite backend implementation.

use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StorageError, StorageResult};
use crate::import::read_sites_csv_file;
use crate::types::Site;

use super::schema::{self, SITE_COLUMNS, SITE_TABLE};

/// SQLite backend for site storage.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    ///
    /// In-memory databases always use a single connection, since every
    /// connection to `:memory:` opens a separate database.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better concurrency.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> StorageResult<Self> {
        let is_memory = path.as_ref().to_string_lossy() == ":memory:";

        let busy_timeout = Duration::from_millis(config.busy_timeout_ms as u64);
        let manager = if is_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(path.as_ref())
        };
        let manager = manager.with_init(move |conn| conn.busy_timeout(busy_timeout));

        let builder = Pool::builder()
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms));
        let builder = if is_memory {
            // The database lives as long as its only connection.
            builder
                .max_size(1)
                .min_idle(Some(1))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            builder
                .max_size(config.max_connections.max(1))
                .min_idle(Some(config.min_connections.min(config.max_connections)))
        };

        let pool = builder.build(manager).map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })?;

        let backend = Self {
            pool,
            config,
            is_memory,
        };

        backend.configure_connection()?;

        Ok(backend)
    }

    /// Initialize the database schema.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Configure database-wide settings.
    fn configure_connection(&self) -> StorageResult<()> {
        if self.config.enable_wal && !self.is_memory {
            let conn = self.get_connection()?;
            conn.execute_batch("PRAGMA journal_mode = WAL;").map_err(|e| {
                StorageError::Backend(BackendError::Internal {
                    backend_name: "sqlite".to_string(),
                    message: format!("Failed to enable WAL mode: {}", e),
                    source: None,
                })
            })?;
        }

        Ok(())
    }

    /// Replaces the contents of the site table in one transaction.
    ///
    /// Rows are inserted in slice order, which becomes the table order used
    /// by listings. Returns the number of rows written.
    pub fn replace_sites(&self, sites: &[Site]) -> StorageResult<usize> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        tx.execute(&format!("DELETE FROM {}", SITE_TABLE), [])?;
        {
            let placeholders: Vec<String> =
                (1..=SITE_COLUMNS.len()).map(|i| format!("?{}", i)).collect();
            let sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                SITE_TABLE,
                SITE_COLUMNS.join(", "),
                placeholders.join(", ")
            );
            let mut stmt = tx.prepare(&sql)?;
            for site in sites {
                let params = insert_params(site);
                stmt.execute(&params[..])?;
            }
        }
        tx.commit()?;

        tracing::debug!(rows = sites.len(), "Replaced site table contents");
        Ok(sites.len())
    }

    /// Loads a CSV export into the site table, replacing its contents.
    pub fn import_csv<P: AsRef<Path>>(&self, path: P) -> StorageResult<usize> {
        let import = read_sites_csv_file(path.as_ref())?;
        let rows = self.replace_sites(&import.sites)?;
        tracing::info!(
            path = %path.as_ref().display(),
            rows,
            "Imported sites from CSV"
        );
        Ok(rows)
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }
}

/// Binds a site's fields in table column order.
fn insert_params(site: &Site) -> [&dyn ToSql; SITE_COLUMNS.len()] {
    [
        &site.unique_number,
        &site.id_no,
        &site.rev_bis,
        &site.name_en,
        &site.name_fr,
        &site.short_description_en,
        &site.short_description_fr,
        &site.justification_en,
        &site.justification_fr,
        &site.date_inscribed,
        &site.secondary_dates,
        &site.danger,
        &site.date_end,
        &site.danger_list,
        &site.longitude,
        &site.latitude,
        &site.area_hectares,
        &site.c1,
        &site.c2,
        &site.c3,
        &site.c4,
        &site.c5,
        &site.c6,
        &site.n7,
        &site.n8,
        &site.n9,
        &site.n10,
        &site.criteria_txt,
        &site.category,
        &site.category_short,
        &site.states_name_en,
        &site.states_name_fr,
        &site.region_en,
        &site.region_fr,
        &site.iso_code,
        &site.udnp_code,
        &site.transboundary,
    ]
}
