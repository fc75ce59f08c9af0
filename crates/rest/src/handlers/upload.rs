//! CSV upload summary handler.
//!
//! The uploaded rows are loaded into a private in-memory database, summarized
//! and dropped with it. Nothing reaches the served table.

use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, header::CONTENT_TYPE},
};
use heritage_persistence::backends::sqlite::SqliteBackend;
use heritage_persistence::core::SiteStorage;
use heritage_persistence::import::read_sites_csv;
use heritage_persistence::types::SiteStatistics;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{RestError, RestResult};

/// Summary of an uploaded file.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    /// Number of data rows.
    pub rows: usize,
    /// Header names in file order.
    pub columns: Vec<String>,
    /// Statistics computed over the uploaded rows.
    pub statistics: SiteStatistics,
}

fn is_csv(headers: &HeaderMap) -> bool {
    let Some(mime) = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
    else {
        return false;
    };

    matches!(
        (mime.type_().as_str(), mime.subtype().as_str()),
        ("text", "csv") | ("application", "csv") | ("text", "plain")
    )
}

/// Handler for CSV uploads.
///
/// # HTTP Request
///
/// `POST /sites/upload` with a `text/csv`, `application/csv` or `text/plain`
/// body.
///
/// # Response
///
/// - `200 OK` - `{"rows", "columns", "statistics"}`
/// - `400 Bad Request` - Any other content type
/// - `500 Internal Server Error` - The CSV could not be parsed
pub async fn upload_handler(headers: HeaderMap, body: Bytes) -> RestResult<Json<UploadSummary>> {
    debug!(bytes = body.len(), "Processing upload request");

    if !is_csv(&headers) {
        return Err(RestError::BadRequest {
            message: "Unsupported file type. Please upload a CSV file.".to_string(),
        });
    }

    let import = read_sites_csv(body.as_ref())?;

    let scratch = SqliteBackend::in_memory()?;
    scratch.init_schema()?;
    scratch.replace_sites(&import.sites)?;
    let statistics = scratch.statistics().await?;

    info!(
        rows = import.row_count(),
        columns = import.columns.len(),
        "Summarized uploaded CSV"
    );

    Ok(Json(UploadSummary {
        rows: import.row_count(),
        columns: import.columns,
        statistics,
    }))
}
