//! SiteStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, params_from_iter};

use crate::core::SiteStorage;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{
    DistinctField, GeoFeature, Site, SiteFilter, SiteQuery, SiteStatistics, SiteSummary,
};

use super::SqliteBackend;
use super::query_builder::{SiteQueryBuilder, SqlFragment};
use super::stats::compute_statistics;

#[async_trait]
impl SiteStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection().map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "sqlite".to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| {
                StorageError::Backend(BackendError::Unavailable {
                    backend_name: "sqlite".to_string(),
                    message: format!("Health check failed: {}", e),
                })
            })
    }

    async fn find_sites(&self, query: &SiteQuery) -> StorageResult<Vec<SiteSummary>> {
        let conn = self.get_connection()?;
        let fragment = SiteQueryBuilder::build_summary_select(query);
        tracing::debug!(sql = %fragment.sql, params = fragment.params.len(), "Listing sites");
        query_all(&conn, &fragment, summary_from_row)
    }

    async fn get_site(&self, id_no: i64) -> StorageResult<Option<Site>> {
        let conn = self.get_connection()?;
        let fragment = SiteQueryBuilder::build_detail_select(id_no);
        let mut sites = query_all(&conn, &fragment, site_from_row)?;
        Ok(sites.pop())
    }

    async fn distinct_values(&self, field: DistinctField) -> StorageResult<Vec<String>> {
        let conn = self.get_connection()?;
        let fragment = SiteQueryBuilder::build_distinct(field);
        query_all(&conn, &fragment, |row| lenient_text(row, 0).map(Option::unwrap_or_default))
    }

    async fn statistics(&self) -> StorageResult<SiteStatistics> {
        let conn = self.get_connection()?;
        compute_statistics(&conn)
    }

    async fn geo_features(&self, filter: &SiteFilter) -> StorageResult<Vec<GeoFeature>> {
        let conn = self.get_connection()?;
        let fragment = SiteQueryBuilder::build_geo_select(filter);
        let sites = query_all(&conn, &fragment, site_from_row)?;
        Ok(sites.iter().filter_map(GeoFeature::from_site).collect())
    }
}

/// Runs a statement and maps every row.
fn query_all<T, F>(conn: &Connection, fragment: &SqlFragment, map: F) -> StorageResult<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(&fragment.sql)?;
    let rows = stmt.query_map(params_from_iter(fragment.params.iter()), map)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
}

/// Maps a row selected with the full column list.
fn site_from_row(row: &Row<'_>) -> rusqlite::Result<Site> {
    Ok(Site {
        unique_number: lenient_int(row, 0)?,
        id_no: lenient_int(row, 1)?,
        rev_bis: lenient_text(row, 2)?,
        name_en: lenient_text(row, 3)?.unwrap_or_default(),
        name_fr: lenient_text(row, 4)?,
        short_description_en: lenient_text(row, 5)?,
        short_description_fr: lenient_text(row, 6)?,
        justification_en: lenient_text(row, 7)?,
        justification_fr: lenient_text(row, 8)?,
        date_inscribed: lenient_int(row, 9)?,
        secondary_dates: lenient_text(row, 10)?,
        danger: lenient_int(row, 11)?,
        date_end: lenient_real(row, 12)?,
        danger_list: lenient_text(row, 13)?,
        longitude: lenient_real(row, 14)?,
        latitude: lenient_real(row, 15)?,
        area_hectares: lenient_real(row, 16)?,
        c1: lenient_int(row, 17)?,
        c2: lenient_int(row, 18)?,
        c3: lenient_int(row, 19)?,
        c4: lenient_int(row, 20)?,
        c5: lenient_int(row, 21)?,
        c6: lenient_int(row, 22)?,
        n7: lenient_int(row, 23)?,
        n8: lenient_int(row, 24)?,
        n9: lenient_int(row, 25)?,
        n10: lenient_int(row, 26)?,
        criteria_txt: lenient_text(row, 27)?,
        category: lenient_text(row, 28)?,
        category_short: lenient_text(row, 29)?,
        states_name_en: lenient_text(row, 30)?.unwrap_or_default(),
        states_name_fr: lenient_text(row, 31)?,
        region_en: lenient_text(row, 32)?,
        region_fr: lenient_text(row, 33)?,
        iso_code: lenient_text(row, 34)?,
        udnp_code: lenient_text(row, 35)?,
        transboundary: lenient_int(row, 36)?,
    })
}

/// Maps a row selected with the summary column list.
fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SiteSummary> {
    Ok(SiteSummary {
        unique_number: lenient_int(row, 0)?,
        id_no: lenient_int(row, 1)?,
        rev_bis: lenient_text(row, 2)?,
        name_en: lenient_text(row, 3)?.unwrap_or_default(),
        name_fr: lenient_text(row, 4)?,
        short_description_en: lenient_text(row, 5)?,
        short_description_fr: lenient_text(row, 6)?,
        longitude: lenient_real(row, 7)?,
        latitude: lenient_real(row, 8)?,
        category: lenient_text(row, 9)?,
        category_short: lenient_text(row, 10)?,
        states_name_en: lenient_text(row, 11)?.unwrap_or_default(),
        region_en: lenient_text(row, 12)?,
        date_inscribed: lenient_int(row, 13)?,
    })
}

fn type_error(row: &Row<'_>, idx: usize, value: ValueRef<'_>) -> rusqlite::Error {
    let name = row
        .as_ref()
        .column_name(idx)
        .map(str::to_string)
        .unwrap_or_else(|_| idx.to_string());
    rusqlite::Error::InvalidColumnType(idx, name, value.data_type())
}

/// Reads an integer column that may hold an integral REAL or numeric text.
fn lenient_int(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    let value = row.get_ref(idx)?;
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(i)),
        ValueRef::Real(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
        ValueRef::Text(t) => {
            let text = String::from_utf8_lossy(t);
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            match text.parse::<i64>() {
                Ok(i) => Ok(Some(i)),
                Err(_) => match text.parse::<f64>() {
                    Ok(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
                    _ => Err(type_error(row, idx, value)),
                },
            }
        }
        _ => Err(type_error(row, idx, value)),
    }
}

/// Reads a REAL column that may hold an integer or numeric text.
fn lenient_real(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<f64>> {
    let value = row.get_ref(idx)?;
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Real(f) => Ok(Some(f)),
        ValueRef::Integer(i) => Ok(Some(i as f64)),
        ValueRef::Text(t) => {
            let text = String::from_utf8_lossy(t);
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| type_error(row, idx, value))
        }
        ValueRef::Blob(_) => Err(type_error(row, idx, value)),
    }
}

/// Reads a TEXT column, rendering stray numbers as text.
fn lenient_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Text(t) | ValueRef::Blob(t) => Ok(Some(String::from_utf8_lossy(t).into_owned())),
        ValueRef::Integer(i) => Ok(Some(i.to_string())),
        ValueRef::Real(f) => Ok(Some(f.to_string())),
    }
}
