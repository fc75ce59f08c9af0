//! Aggregation over the site table.
//!
//! All aggregates are read inside one transaction so they describe the same
//! snapshot of the table.

use rusqlite::Connection;

use crate::error::StorageResult;
use crate::types::{CountMap, Criterion, SiteStatistics, decade_label};

use super::schema::SITE_TABLE;

/// Computes every aggregate served by the statistics endpoint.
pub(crate) fn compute_statistics(conn: &Connection) -> StorageResult<SiteStatistics> {
    let tx = conn.unchecked_transaction()?;

    let total_sites = count(&tx, &format!("SELECT COUNT(*) FROM {}", SITE_TABLE))?;
    let sites_by_category = grouped_counts(
        &tx,
        &format!(
            "SELECT category_short, COUNT(*) FROM {SITE_TABLE}
             WHERE category_short IS NOT NULL AND TRIM(category_short) <> ''
             GROUP BY category_short
             ORDER BY category_short"
        ),
    )?;
    let sites_by_region = grouped_counts(
        &tx,
        &format!(
            "SELECT region_en, COUNT(*) FROM {SITE_TABLE}
             WHERE region_en IS NOT NULL AND TRIM(region_en) <> ''
             GROUP BY region_en
             ORDER BY COUNT(*) DESC, region_en ASC"
        ),
    )?;
    let sites_in_danger = count(
        &tx,
        &format!("SELECT COUNT(*) FROM {} WHERE danger = 1", SITE_TABLE),
    )?;
    let transboundary_sites = count(
        &tx,
        &format!("SELECT COUNT(*) FROM {} WHERE transboundary = 1", SITE_TABLE),
    )?;
    let criteria_counts = criteria_counts(&tx)?;
    let sites_by_decade = decade_counts(&tx)?;

    tx.commit()?;

    tracing::debug!(total_sites, "Computed site statistics");

    Ok(SiteStatistics {
        total_sites,
        sites_by_category,
        sites_by_region,
        sites_in_danger,
        transboundary_sites,
        criteria_counts,
        sites_by_decade,
    })
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn count(conn: &Connection, sql: &str) -> StorageResult<u64> {
    let n: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(to_count(n))
}

fn grouped_counts(conn: &Connection, sql: &str) -> StorageResult<CountMap> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        let key: rusqlite::types::Value = row.get(0)?;
        let n: i64 = row.get(1)?;
        Ok((group_key(key), to_count(n)))
    })?;

    let mut map = CountMap::new();
    for row in rows {
        let (key, n) = row?;
        map.push(key, n);
    }
    Ok(map)
}

/// Renders a grouping value as a map key; spreadsheet exports occasionally
/// store numbers in text columns.
fn group_key(value: rusqlite::types::Value) -> String {
    use rusqlite::types::Value;
    match value {
        Value::Text(s) => s,
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
        Value::Null => String::new(),
    }
}

fn criteria_counts(conn: &Connection) -> StorageResult<CountMap> {
    let columns: Vec<String> = Criterion::ALL
        .iter()
        .map(|c| format!("COUNT(CASE WHEN {} = 1 THEN 1 END)", c.column()))
        .collect();
    let sql = format!("SELECT {} FROM {}", columns.join(", "), SITE_TABLE);

    let counts: Vec<i64> = conn.query_row(&sql, [], |row| {
        (0..Criterion::ALL.len())
            .map(|i| row.get::<_, i64>(i))
            .collect()
    })?;

    Ok(Criterion::ALL
        .iter()
        .zip(counts)
        .map(|(criterion, n)| (criterion.code().to_string(), to_count(n)))
        .collect())
}

fn decade_counts(conn: &Connection) -> StorageResult<CountMap> {
    let sql = format!(
        "SELECT CAST(date_inscribed AS INTEGER) AS year, COUNT(*) FROM {SITE_TABLE}
         WHERE date_inscribed IS NOT NULL AND TRIM(date_inscribed) <> ''
         GROUP BY year
         ORDER BY year"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;

    // Years arrive ascending, so decades do too.
    let mut buckets: Vec<(String, u64)> = Vec::new();
    for row in rows {
        let (year, n) = row?;
        let label = decade_label(year);
        match buckets.last_mut() {
            Some((last, total)) if *last == label => *total += to_count(n),
            _ => buckets.push((label, to_count(n))),
        }
    }

    Ok(buckets.into_iter().collect())
}
