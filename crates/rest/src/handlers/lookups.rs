//! Distinct-value and reference-data handlers.

use axum::{Json, extract::State};
use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::{Criterion, CriterionKind, DistinctField};
use serde::Serialize;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

async fn distinct<S>(state: &AppState<S>, field: DistinctField) -> RestResult<Json<Vec<String>>>
where
    S: SiteStorage + 'static,
{
    let values = state.storage().distinct_values(field).await?;
    debug!(column = field.column(), count = values.len(), "Listed distinct values");
    Ok(Json(values))
}

/// Handler for the sorted list of countries.
///
/// # HTTP Request
///
/// `GET /sites/countries`
pub async fn countries_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<Vec<String>>>
where
    S: SiteStorage + 'static,
{
    distinct(&state, DistinctField::Country).await
}

/// Handler for the sorted list of regions.
///
/// # HTTP Request
///
/// `GET /sites/regions`
pub async fn regions_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<Vec<String>>>
where
    S: SiteStorage + 'static,
{
    distinct(&state, DistinctField::Region).await
}

/// Handler for the sorted list of category codes.
///
/// # HTTP Request
///
/// `GET /sites/categories`
pub async fn categories_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<Vec<String>>>
where
    S: SiteStorage + 'static,
{
    distinct(&state, DistinctField::Category).await
}

/// One entry of the criteria reference.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionInfo {
    /// Criterion code, e.g. `c1`.
    pub id: &'static str,
    /// Short official description.
    pub description: &'static str,
}

/// The criteria reference, split by family.
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaInfo {
    /// Criteria i-vi.
    pub cultural: Vec<CriterionInfo>,
    /// Criteria vii-x.
    pub natural: Vec<CriterionInfo>,
}

impl CriteriaInfo {
    /// Builds the reference from the criterion table.
    pub fn build() -> Self {
        let of_kind = |kind: CriterionKind| {
            Criterion::ALL
                .iter()
                .filter(|c| c.kind() == kind)
                .map(|c| CriterionInfo {
                    id: c.code(),
                    description: c.description(),
                })
                .collect()
        };

        Self {
            cultural: of_kind(CriterionKind::Cultural),
            natural: of_kind(CriterionKind::Natural),
        }
    }
}

/// Handler for the criteria reference.
///
/// # HTTP Request
///
/// `GET /sites/criteria`
pub async fn criteria_handler() -> Json<CriteriaInfo> {
    Json(CriteriaInfo::build())
}
