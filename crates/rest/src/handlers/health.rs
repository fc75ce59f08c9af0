//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use heritage_persistence::core::SiteStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs a trivial query against the store before reporting healthy.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server and store are healthy
/// - `500 Internal Server Error` - The store did not answer
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: SiteStorage + 'static,
{
    debug!("Processing health check request");

    state.storage().health_check().await?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
