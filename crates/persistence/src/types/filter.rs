//! Site filter criteria.
//!
//! A [`SiteFilter`] is a bag of independent, optional criteria. The query
//! builder turns each supplied criterion into one predicate and joins them
//! with `AND`; an absent criterion contributes nothing.

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;
use super::pagination::PageWindow;

/// How a text criterion is compared with its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextMatch {
    /// Case-insensitive substring match.
    Contains(String),
    /// Exact equality.
    Exact(String),
}

impl TextMatch {
    /// Returns the value being matched.
    pub fn value(&self) -> &str {
        match self {
            TextMatch::Contains(v) | TextMatch::Exact(v) => v,
        }
    }
}

/// The set of columns a free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchScope {
    /// Names and short descriptions in both languages.
    NamesAndDescriptions,
    /// Names, descriptions, justifications, country and region.
    FullText,
}

impl SearchScope {
    /// Returns the columns searched by this scope.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            SearchScope::NamesAndDescriptions => &[
                "name_en",
                "name_fr",
                "short_description_en",
                "short_description_fr",
            ],
            SearchScope::FullText => &[
                "name_en",
                "name_fr",
                "short_description_en",
                "short_description_fr",
                "justification_en",
                "justification_fr",
                "states_name_en",
                "region_en",
            ],
        }
    }
}

/// A free-text search term and the columns it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSearch {
    /// The term, matched as a case-insensitive substring.
    pub term: String,
    /// Columns to search; any match qualifies.
    pub scope: SearchScope,
}

/// Optional criteria for selecting sites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteFilter {
    /// Match against `states_name_en`.
    pub country: Option<TextMatch>,
    /// Match against `region_en`.
    pub region: Option<TextMatch>,
    /// Match against `category_short`.
    pub category: Option<TextMatch>,
    /// Required `danger` flag.
    pub danger: Option<bool>,
    /// Required `transboundary` flag.
    pub transboundary: Option<bool>,
    /// Inclusive lower bound on `date_inscribed`.
    pub year_from: Option<i64>,
    /// Inclusive upper bound on `date_inscribed`.
    pub year_to: Option<i64>,
    /// Free-text search across several columns.
    pub text: Option<TextSearch>,
    /// Criteria that must all be satisfied.
    pub criteria: Vec<Criterion>,
}

impl SiteFilter {
    /// Creates an empty filter that matches every site.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self == &SiteFilter::default()
    }

    /// Restricts to countries whose name contains `value`.
    pub fn with_country_containing(mut self, value: impl Into<String>) -> Self {
        self.country = Some(TextMatch::Contains(value.into()));
        self
    }

    /// Restricts to one exact country name.
    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(TextMatch::Exact(value.into()));
        self
    }

    /// Restricts to regions whose name contains `value`.
    pub fn with_region_containing(mut self, value: impl Into<String>) -> Self {
        self.region = Some(TextMatch::Contains(value.into()));
        self
    }

    /// Restricts to one exact region name.
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(TextMatch::Exact(value.into()));
        self
    }

    /// Restricts to categories whose code contains `value`.
    pub fn with_category_containing(mut self, value: impl Into<String>) -> Self {
        self.category = Some(TextMatch::Contains(value.into()));
        self
    }

    /// Restricts to one exact category code.
    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(TextMatch::Exact(value.into()));
        self
    }

    /// Requires the danger flag to equal `value`.
    pub fn with_danger(mut self, value: bool) -> Self {
        self.danger = Some(value);
        self
    }

    /// Requires the transboundary flag to equal `value`.
    pub fn with_transboundary(mut self, value: bool) -> Self {
        self.transboundary = Some(value);
        self
    }

    /// Sets the inclusive inscription year range; either end may be open.
    pub fn with_years(mut self, from: Option<i64>, to: Option<i64>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    /// Restricts to one inscription year.
    pub fn inscribed_in(self, year: i64) -> Self {
        self.with_years(Some(year), Some(year))
    }

    /// Adds a free-text search.
    pub fn with_search(mut self, term: impl Into<String>, scope: SearchScope) -> Self {
        self.text = Some(TextSearch {
            term: term.into(),
            scope,
        });
        self
    }

    /// Requires a criterion, keeping the list free of duplicates.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        if !self.criteria.contains(&criterion) {
            self.criteria.push(criterion);
        }
        self
    }

    /// Requires every criterion named in a comma-separated list.
    ///
    /// Unrecognized tokens are ignored.
    pub fn with_criteria_list(self, list: &str) -> Self {
        Criterion::parse_list(list)
            .into_iter()
            .fold(self, |filter, criterion| filter.with_criterion(criterion))
    }
}

/// Row ordering for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteOrder {
    /// Table order, which keeps pagination stable.
    #[default]
    Table,
    /// Alphabetical by English name.
    Name,
}

/// A complete listing request: filter, ordering and optional page window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteQuery {
    /// Which sites to return.
    pub filter: SiteFilter,
    /// How to order them.
    pub order: SiteOrder,
    /// Which slice to return; `None` returns every match.
    pub window: Option<PageWindow>,
}

impl SiteQuery {
    /// Creates an unpaginated, table-ordered query.
    pub fn new(filter: SiteFilter) -> Self {
        Self {
            filter,
            order: SiteOrder::Table,
            window: None,
        }
    }

    /// Creates a query matching every site.
    pub fn all() -> Self {
        Self::new(SiteFilter::new())
    }

    /// Sets the ordering.
    pub fn ordered_by(mut self, order: SiteOrder) -> Self {
        self.order = order;
        self
    }

    /// Restricts the result to a page window.
    pub fn paginate(mut self, window: PageWindow) -> Self {
        self.window = Some(window);
        self
    }
}
