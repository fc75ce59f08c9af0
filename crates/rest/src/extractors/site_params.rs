//! Site filter extractors.
//!
//! Turn query-string parameters into a [`SiteFilter`]. The listing filter
//! matches `country`, `region` and `category` as substrings; the map filter
//! matches them exactly because its values come from the distinct-value
//! lists.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use heritage_persistence::types::{Criterion, SearchScope, SiteFilter};
use serde::Deserialize;
use tracing::debug;

use super::params::{non_empty, parse_bool, parse_int};
use crate::error::RestError;

async fn raw_query<T, S>(parts: &mut Parts, state: &S) -> Result<T, RestError>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    let Query(query) = Query::<T>::from_request_parts(parts, state)
        .await
        .map_err(|e| RestError::BadRequest {
            message: e.body_text(),
        })?;
    Ok(query)
}

#[derive(Debug, Default, Deserialize)]
struct RawFilterQuery {
    country: Option<String>,
    region: Option<String>,
    category: Option<String>,
    danger: Option<String>,
    transboundary: Option<String>,
    year_from: Option<String>,
    year_to: Option<String>,
    search: Option<String>,
    criteria: Option<String>,
}

/// Filter parameters for `GET /sites/filter`.
///
/// # Example
///
/// ```rust,ignore
/// use heritage_rest::extractors::FilterParams;
///
/// async fn filter_handler(params: FilterParams) {
///     let filter = params.into_filter();
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    /// Substring of the country name.
    pub country: Option<String>,
    /// Substring of the region name.
    pub region: Option<String>,
    /// Substring of the category code.
    pub category: Option<String>,
    /// Required danger flag.
    pub danger: Option<bool>,
    /// Required transboundary flag.
    pub transboundary: Option<bool>,
    /// Inclusive lower inscription year.
    pub year_from: Option<i64>,
    /// Inclusive upper inscription year.
    pub year_to: Option<i64>,
    /// Term searched in names and short descriptions.
    pub search: Option<String>,
    /// Comma-separated criteria codes.
    pub criteria: Option<String>,
}

impl FilterParams {
    fn from_raw(raw: RawFilterQuery) -> Result<Self, RestError> {
        Ok(Self {
            country: non_empty(raw.country),
            region: non_empty(raw.region),
            category: non_empty(raw.category),
            danger: parse_bool("danger", raw.danger)?,
            transboundary: parse_bool("transboundary", raw.transboundary)?,
            year_from: parse_int("year_from", raw.year_from)?,
            year_to: parse_int("year_to", raw.year_to)?,
            search: non_empty(raw.search),
            criteria: non_empty(raw.criteria),
        })
    }

    /// Builds the storage filter.
    pub fn into_filter(self) -> SiteFilter {
        let mut filter = SiteFilter::new().with_years(self.year_from, self.year_to);

        if let Some(country) = self.country {
            filter = filter.with_country_containing(country);
        }
        if let Some(region) = self.region {
            filter = filter.with_region_containing(region);
        }
        if let Some(category) = self.category {
            filter = filter.with_category_containing(category);
        }
        if let Some(danger) = self.danger {
            filter = filter.with_danger(danger);
        }
        if let Some(transboundary) = self.transboundary {
            filter = filter.with_transboundary(transboundary);
        }
        if let Some(search) = self.search {
            filter = filter.with_search(search, SearchScope::NamesAndDescriptions);
        }
        if let Some(criteria) = self.criteria {
            filter = filter.with_criteria_list(&criteria);
        }

        filter
    }
}

impl<S> FromRequestParts<S> for FilterParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_query::<RawFilterQuery, S>(parts, state).await?;
        FilterParams::from_raw(raw)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawGeoQuery {
    country: Option<String>,
    region: Option<String>,
    category: Option<String>,
    criteria: Option<String>,
    danger: Option<String>,
    transboundary: Option<String>,
}

/// Filter parameters for `GET /sites/geo`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoParams {
    /// Exact country name.
    pub country: Option<String>,
    /// Exact region name.
    pub region: Option<String>,
    /// Exact category code.
    pub category: Option<String>,
    /// A single criterion code.
    pub criteria: Option<String>,
    /// Required danger flag.
    pub danger: Option<bool>,
    /// Required transboundary flag.
    pub transboundary: Option<bool>,
}

impl GeoParams {
    fn from_raw(raw: RawGeoQuery) -> Result<Self, RestError> {
        Ok(Self {
            country: non_empty(raw.country),
            region: non_empty(raw.region),
            category: non_empty(raw.category),
            criteria: non_empty(raw.criteria),
            danger: parse_bool("danger", raw.danger)?,
            transboundary: parse_bool("transboundary", raw.transboundary)?,
        })
    }

    /// Builds the storage filter.
    ///
    /// Only one criterion is honored; an unrecognized code is ignored.
    pub fn into_filter(self) -> SiteFilter {
        let mut filter = SiteFilter::new();

        if let Some(country) = self.country {
            filter = filter.with_country(country);
        }
        if let Some(region) = self.region {
            filter = filter.with_region(region);
        }
        if let Some(category) = self.category {
            filter = filter.with_category(category);
        }
        if let Some(danger) = self.danger {
            filter = filter.with_danger(danger);
        }
        if let Some(transboundary) = self.transboundary {
            filter = filter.with_transboundary(transboundary);
        }
        if let Some(code) = self.criteria {
            match Criterion::parse(&code) {
                Some(criterion) => filter = filter.with_criterion(criterion),
                None => debug!(criteria = %code, "Ignoring unrecognized criterion"),
            }
        }

        filter
    }
}

impl<S> FromRequestParts<S> for GeoParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_query::<RawGeoQuery, S>(parts, state).await?;
        GeoParams::from_raw(raw)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSearchQuery {
    q: Option<String>,
}

/// The required `q` term of `GET /sites/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(pub String);

impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_query::<RawSearchQuery, S>(parts, state).await?;
        non_empty(raw.q)
            .map(SearchTerm)
            .ok_or_else(|| RestError::BadRequest {
                message: "Search query 'q' is required".to_string(),
            })
    }
}
