//! SQLite schema definitions.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Name of the site table.
pub const SITE_TABLE: &str = "sites_xlsx_export";

/// Every column of the site table, in table order.
pub(crate) const SITE_COLUMNS: [&str; 37] = [
    "unique_number",
    "id_no",
    "rev_bis",
    "name_en",
    "name_fr",
    "short_description_en",
    "short_description_fr",
    "justification_en",
    "justification_fr",
    "date_inscribed",
    "secondary_dates",
    "danger",
    "date_end",
    "danger_list",
    "longitude",
    "latitude",
    "area_hectares",
    "c1",
    "c2",
    "c3",
    "c4",
    "c5",
    "c6",
    "n7",
    "n8",
    "n9",
    "n10",
    "criteria_txt",
    "category",
    "category_short",
    "states_name_en",
    "states_name_fr",
    "region_en",
    "region_fr",
    "iso_code",
    "udnp_code",
    "transboundary",
];

/// Columns of the listing projection, in output order.
pub(crate) const SUMMARY_COLUMNS: [&str; 14] = [
    "unique_number",
    "id_no",
    "rev_bis",
    "name_en",
    "name_fr",
    "short_description_en",
    "short_description_fr",
    "longitude",
    "latitude",
    "category",
    "category_short",
    "states_name_en",
    "region_en",
    "date_inscribed",
];

/// Initialize the database schema.
///
/// An existing export is left untouched: nothing is written when the site
/// table is already present.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    if site_table_exists(conn)? {
        tracing::debug!(table = SITE_TABLE, "Site table present, skipping schema setup");
        return Ok(());
    }

    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    }

    Ok(())
}

fn schema_error(context: &str, e: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::SchemaError {
        message: format!("{}: {}", context, e),
    })
}

fn site_table_exists(conn: &Connection) -> StorageResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [SITE_TABLE],
            |row| row.get(0),
        )
        .map_err(|e| schema_error("Failed to inspect sqlite_master", e))?;
    Ok(count > 0)
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error("Failed to create schema_version table", e))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| schema_error("Failed to clear schema_version", e))?;

    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
        .map_err(|e| schema_error("Failed to set schema_version", e))?;

    Ok(())
}

/// Create the site table and its lookup indexes.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS sites_xlsx_export (
            unique_number INTEGER,
            id_no INTEGER,
            rev_bis TEXT,
            name_en TEXT NOT NULL,
            name_fr TEXT,
            short_description_en TEXT,
            short_description_fr TEXT,
            justification_en TEXT,
            justification_fr TEXT,
            date_inscribed INTEGER,
            secondary_dates TEXT,
            danger INTEGER,
            date_end REAL,
            danger_list TEXT,
            longitude REAL,
            latitude REAL,
            area_hectares REAL,
            c1 INTEGER,
            c2 INTEGER,
            c3 INTEGER,
            c4 INTEGER,
            c5 INTEGER,
            c6 INTEGER,
            n7 INTEGER,
            n8 INTEGER,
            n9 INTEGER,
            n10 INTEGER,
            criteria_txt TEXT,
            category TEXT,
            category_short TEXT,
            states_name_en TEXT NOT NULL,
            states_name_fr TEXT,
            region_en TEXT,
            region_fr TEXT,
            iso_code TEXT,
            udnp_code TEXT,
            transboundary INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_sites_id_no ON sites_xlsx_export(id_no);
        CREATE INDEX IF NOT EXISTS idx_sites_states ON sites_xlsx_export(states_name_en);
        CREATE INDEX IF NOT EXISTS idx_sites_region ON sites_xlsx_export(region_en);",
    )
    .map_err(|e| schema_error("Failed to create site table", e))?;

    Ok(())
}
