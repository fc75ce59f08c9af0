//! SQL query builder for site listings.
//!
//! Translates a [`SiteFilter`] into a `WHERE` clause over the site table.
//! Each supplied criterion contributes one predicate; predicates are joined
//! with `AND`. Client values are only ever bound as `?N` parameters. Column
//! names written into the SQL text come from closed enums.

use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

use crate::types::{
    DistinctField, PageWindow, SiteFilter, SiteOrder, SiteQuery, TextMatch,
};

use super::schema::{SITE_COLUMNS, SITE_TABLE, SUMMARY_COLUMNS};

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone, Default)]
pub struct SqlFragment {
    /// The SQL text.
    pub sql: String,
    /// Bound parameter values, in placeholder order.
    pub params: Vec<SqlParam>,
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// String parameter.
    String(String),
    /// Integer parameter.
    Integer(i64),
    /// Float parameter.
    Float(f64),
    /// Null parameter.
    Null,
}

impl SqlParam {
    /// Creates a string parameter.
    pub fn string(s: impl Into<String>) -> Self {
        SqlParam::String(s.into())
    }

    /// Creates an integer parameter.
    pub fn integer(i: i64) -> Self {
        SqlParam::Integer(i)
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::String(s) => s.to_sql(),
            SqlParam::Integer(i) => i.to_sql(),
            SqlParam::Float(f) => f.to_sql(),
            SqlParam::Null => rusqlite::types::Null.to_sql(),
        }
    }
}

impl SqlFragment {
    /// Creates a new SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter and returns its placeholder.
    pub fn add_param(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("?{}", self.params.len())
    }

    /// Returns true if this fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Escapes `LIKE` wildcards so the value matches literally.
///
/// Pair with `ESCAPE '\'`.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Builds the SQL statements used by the SQLite site storage.
pub struct SiteQueryBuilder;

impl SiteQueryBuilder {
    /// Builds the `WHERE` predicate for a filter.
    ///
    /// Returns an empty fragment when the filter has no criteria.
    pub fn build_where(filter: &SiteFilter) -> SqlFragment {
        let mut fragment = SqlFragment::default();
        let mut conditions: Vec<String> = Vec::new();

        if let Some(matcher) = &filter.country {
            conditions.push(text_condition(&mut fragment, "states_name_en", matcher));
        }
        if let Some(matcher) = &filter.region {
            conditions.push(text_condition(&mut fragment, "region_en", matcher));
        }
        if let Some(matcher) = &filter.category {
            conditions.push(text_condition(&mut fragment, "category_short", matcher));
        }
        if let Some(danger) = filter.danger {
            let p = fragment.add_param(SqlParam::integer(i64::from(danger)));
            conditions.push(format!("danger = {}", p));
        }
        if let Some(transboundary) = filter.transboundary {
            let p = fragment.add_param(SqlParam::integer(i64::from(transboundary)));
            conditions.push(format!("transboundary = {}", p));
        }
        if let Some(from) = filter.year_from {
            let p = fragment.add_param(SqlParam::integer(from));
            conditions.push(format!("date_inscribed >= {}", p));
        }
        if let Some(to) = filter.year_to {
            let p = fragment.add_param(SqlParam::integer(to));
            conditions.push(format!("date_inscribed <= {}", p));
        }
        if let Some(search) = &filter.text {
            let pattern = format!("%{}%", escape_like(&search.term));
            let p = fragment.add_param(SqlParam::String(pattern));
            let alternatives: Vec<String> = search
                .scope
                .columns()
                .iter()
                .map(|column| format!("{} LIKE {} ESCAPE '\\'", column, p))
                .collect();
            conditions.push(format!("({})", alternatives.join(" OR ")));
        }
        for criterion in &filter.criteria {
            conditions.push(format!("{} = 1", criterion.column()));
        }

        fragment.sql = conditions.join(" AND ");
        fragment
    }

    /// Builds the summary listing statement for a query.
    pub fn build_summary_select(query: &SiteQuery) -> SqlFragment {
        let mut fragment = select_from(&SUMMARY_COLUMNS, &query.filter, None);
        fragment.sql.push_str(order_clause(query.order));
        if let Some(window) = query.window {
            push_window(&mut fragment, window);
        }
        fragment
    }

    /// Builds the full-record lookup by `id_no`, first row in table order.
    pub fn build_detail_select(id_no: i64) -> SqlFragment {
        let mut fragment = SqlFragment::default();
        let p = fragment.add_param(SqlParam::integer(id_no));
        fragment.sql = format!(
            "SELECT {} FROM {} WHERE id_no = {} ORDER BY rowid LIMIT 1",
            SITE_COLUMNS.join(", "),
            SITE_TABLE,
            p
        );
        fragment
    }

    /// Builds the statement selecting full records of mappable sites.
    pub fn build_geo_select(filter: &SiteFilter) -> SqlFragment {
        let mut fragment = select_from(
            &SITE_COLUMNS,
            filter,
            Some("longitude IS NOT NULL AND latitude IS NOT NULL"),
        );
        fragment.sql.push_str(order_clause(SiteOrder::Table));
        fragment
    }

    /// Builds the distinct-values statement for a column.
    pub fn build_distinct(field: DistinctField) -> SqlFragment {
        let column = field.column();
        SqlFragment::new(format!(
            "SELECT DISTINCT {column} FROM {SITE_TABLE} \
             WHERE {column} IS NOT NULL AND TRIM({column}) <> '' ORDER BY {column}"
        ))
    }
}

fn text_condition(fragment: &mut SqlFragment, column: &str, matcher: &TextMatch) -> String {
    match matcher {
        TextMatch::Contains(value) => {
            let p = fragment.add_param(SqlParam::String(format!("%{}%", escape_like(value))));
            format!("{} LIKE {} ESCAPE '\\'", column, p)
        }
        TextMatch::Exact(value) => {
            let p = fragment.add_param(SqlParam::string(value.as_str()));
            format!("{} = {}", column, p)
        }
    }
}

fn select_from(columns: &[&str], filter: &SiteFilter, extra: Option<&str>) -> SqlFragment {
    let mut fragment = SiteQueryBuilder::build_where(filter);
    let predicate = match (fragment.is_empty(), extra) {
        (true, None) => String::new(),
        (true, Some(extra)) => format!(" WHERE {}", extra),
        (false, None) => format!(" WHERE {}", fragment.sql),
        (false, Some(extra)) => format!(" WHERE {} AND {}", extra, fragment.sql),
    };
    fragment.sql = format!(
        "SELECT {} FROM {}{}",
        columns.join(", "),
        SITE_TABLE,
        predicate
    );
    fragment
}

fn order_clause(order: SiteOrder) -> &'static str {
    match order {
        SiteOrder::Table => " ORDER BY rowid",
        SiteOrder::Name => " ORDER BY name_en, rowid",
    }
}

fn push_window(fragment: &mut SqlFragment, window: PageWindow) {
    let limit = fragment.add_param(SqlParam::integer(clamp_i64(window.limit)));
    let offset = fragment.add_param(SqlParam::integer(clamp_i64(window.offset)));
    fragment
        .sql
        .push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Criterion, PageRequest, SearchScope};

    #[test]
    fn test_empty_filter_has_no_where() {
        let fragment = SiteQueryBuilder::build_where(&SiteFilter::new());
        assert!(fragment.is_empty());
        assert!(fragment.params.is_empty());

        let select = SiteQueryBuilder::build_summary_select(&SiteQuery::all());
        assert!(!select.sql.contains("WHERE"));
        assert!(select.sql.ends_with("ORDER BY rowid"));
    }

    #[test]
    fn test_conditions_joined_with_and() {
        let filter = SiteFilter::new()
            .with_country_containing("senegal")
            .with_danger(true)
            .with_years(Some(1970), None);
        let fragment = SiteQueryBuilder::build_where(&filter);

        assert_eq!(
            fragment.sql,
            "states_name_en LIKE ?1 ESCAPE '\\' AND danger = ?2 AND date_inscribed >= ?3"
        );
        assert_eq!(
            fragment.params,
            vec![
                SqlParam::string("%senegal%"),
                SqlParam::Integer(1),
                SqlParam::Integer(1970),
            ]
        );
    }

    #[test]
    fn test_search_ors_across_columns_with_one_param() {
        let filter = SiteFilter::new()
            .with_region_containing("Africa")
            .with_search("forest", SearchScope::NamesAndDescriptions);
        let fragment = SiteQueryBuilder::build_where(&filter);

        assert!(fragment.sql.starts_with("region_en LIKE ?1"));
        assert!(fragment.sql.contains(
            "(name_en LIKE ?2 ESCAPE '\\' OR name_fr LIKE ?2 ESCAPE '\\' OR \
             short_description_en LIKE ?2 ESCAPE '\\' OR short_description_fr LIKE ?2 ESCAPE '\\')"
        ));
        assert_eq!(fragment.params.len(), 2);
    }

    #[test]
    fn test_criteria_use_literal_flags() {
        let filter = SiteFilter::new()
            .with_criterion(Criterion::C1)
            .with_criterion(Criterion::N7);
        let fragment = SiteQueryBuilder::build_where(&filter);
        assert_eq!(fragment.sql, "c1 = 1 AND n7 = 1");
        assert!(fragment.params.is_empty());
    }

    #[test]
    fn test_exact_match_binds_value() {
        let filter = SiteFilter::new().with_country("Italy");
        let fragment = SiteQueryBuilder::build_where(&filter);
        assert_eq!(fragment.sql, "states_name_en = ?1");
        assert_eq!(fragment.params, vec![SqlParam::string("Italy")]);
    }

    #[test]
    fn test_client_input_never_reaches_sql_text() {
        let hostile = "x' OR 1=1; DROP TABLE sites_xlsx_export; --";
        let filter = SiteFilter::new()
            .with_country_containing(hostile)
            .with_search(hostile, SearchScope::FullText);
        let query = SiteQuery::new(filter);
        let fragment = SiteQueryBuilder::build_summary_select(&query);
        assert!(!fragment.sql.contains("DROP"));
        assert!(!fragment.sql.contains("1=1"));
    }

    #[test]
    fn test_like_wildcards_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_pagination_appended_after_where_params() {
        let query = SiteQuery::new(SiteFilter::new().with_category_containing("Natural"))
            .paginate(PageRequest::new(3, 20).window());
        let fragment = SiteQueryBuilder::build_summary_select(&query);

        assert!(fragment.sql.ends_with("ORDER BY rowid LIMIT ?2 OFFSET ?3"));
        assert_eq!(fragment.params[1], SqlParam::Integer(20));
        assert_eq!(fragment.params[2], SqlParam::Integer(40));
    }

    #[test]
    fn test_name_order() {
        let query = SiteQuery::new(SiteFilter::new().with_country("Mali")).ordered_by(SiteOrder::Name);
        let fragment = SiteQueryBuilder::build_summary_select(&query);
        assert!(fragment.sql.ends_with("WHERE states_name_en = ?1 ORDER BY name_en, rowid"));
    }

    #[test]
    fn test_geo_select_requires_coordinates() {
        let fragment =
            SiteQueryBuilder::build_geo_select(&SiteFilter::new().with_region("Africa"));
        assert!(fragment.sql.contains(
            "WHERE longitude IS NOT NULL AND latitude IS NOT NULL AND region_en = ?1"
        ));
    }

    #[test]
    fn test_detail_select() {
        let detail = SiteQueryBuilder::build_detail_select(26);
        assert!(detail.sql.ends_with("WHERE id_no = ?1 ORDER BY rowid LIMIT 1"));
        assert_eq!(detail.params, vec![SqlParam::Integer(26)]);
    }

    #[test]
    fn test_distinct_excludes_nulls_and_blanks() {
        let fragment = SiteQueryBuilder::build_distinct(DistinctField::Region);
        assert_eq!(
            fragment.sql,
            "SELECT DISTINCT region_en FROM sites_xlsx_export \
             WHERE region_en IS NOT NULL AND TRIM(region_en) <> '' ORDER BY region_en"
        );
    }
}
