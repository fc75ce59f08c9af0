//! SQLite backend integration tests.
//!
//! These tests run the storage trait against an in-memory database seeded
//! with the shared fixture dataset.

mod common;

use heritage_persistence::core::SiteStorage;
use heritage_persistence::types::{
    Criterion, DistinctField, PageRequest, SearchScope, Site, SiteFilter, SiteOrder, SiteQuery,
};

use common::*;

fn names(sites: &[heritage_persistence::types::SiteSummary]) -> Vec<&str> {
    sites.iter().map(|s| s.name_en.as_str()).collect()
}

// ============================================================================
// Listing and Pagination
// ============================================================================

#[tokio::test]
async fn test_list_all_in_table_order() {
    let backend = seeded_backend();

    let sites = backend.find_sites(&SiteQuery::all()).await.unwrap();
    assert_eq!(sites.len(), heritage_sites().len());
    assert_eq!(sites[0].name_en, "Island of Gorée");
    assert_eq!(sites[0].id_no, Some(26));
    assert_eq!(sites[8].id_no, Some(999));
}

#[tokio::test]
async fn test_pages_concatenate_to_full_listing() {
    let backend = seeded_backend();
    let all = backend.find_sites(&SiteQuery::all()).await.unwrap();

    let mut collected = Vec::new();
    for page in 1..=3 {
        let query = SiteQuery::all().paginate(PageRequest::new(page, 4).window());
        let sites = backend.find_sites(&query).await.unwrap();
        assert!(sites.len() <= 4);
        collected.extend(sites);
    }

    assert_eq!(collected, all);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let backend = seeded_backend();
    let query = SiteQuery::all().paginate(PageRequest::new(50, 100).window());
    assert!(backend.find_sites(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_normalized_page_request_starts_at_first_row() {
    let backend = seeded_backend();
    let request = PageRequest::from_raw(Some(0), Some(-1), 2, 1000);
    let sites = backend
        .find_sites(&SiteQuery::all().paginate(request.window()))
        .await
        .unwrap();
    assert_eq!(names(&sites), vec!["Island of Gorée", "Galápagos Islands"]);
}

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn test_country_filter_is_case_insensitive_substring() {
    let backend = seeded_backend();
    let filter = SiteFilter::new().with_country_containing("united states");
    let sites = backend.find_sites(&SiteQuery::new(filter)).await.unwrap();

    assert_eq!(
        names(&sites),
        vec![
            "Yellowstone National Park",
            "Waterton Glacier International Peace Park"
        ]
    );
}

#[tokio::test]
async fn test_goree_filter_examples() {
    let backend = seeded_backend();

    let filter = SiteFilter::new()
        .with_country_containing("Senegal")
        .with_criteria_list("c6");
    let sites = backend.find_sites(&SiteQuery::new(filter)).await.unwrap();
    assert!(sites.iter().any(|s| s.name_en == "Island of Gorée"));

    let filter = SiteFilter::new().with_danger(true);
    let sites = backend.find_sites(&SiteQuery::new(filter)).await.unwrap();
    assert!(sites.iter().all(|s| s.name_en != "Island of Gorée"));
    assert_eq!(names(&sites), vec!["Timbuktu", "Old City of Jerusalem and its Walls"]);
}

#[tokio::test]
async fn test_filtered_results_satisfy_every_predicate() {
    let backend = seeded_backend();
    let all = backend.find_sites(&SiteQuery::all()).await.unwrap();

    let filter = SiteFilter::new()
        .with_region_containing("europe")
        .with_category_containing("natural")
        .with_years(Some(1978), Some(1990));
    let sites = backend.find_sites(&SiteQuery::new(filter)).await.unwrap();

    assert_eq!(names(&sites), vec!["Yellowstone National Park"]);
    for site in &sites {
        assert!(all.contains(site));
        assert!(site.region_en.as_deref().unwrap().contains("Europe"));
        assert_eq!(site.category_short.as_deref(), Some("Natural"));
        let year = site.date_inscribed.unwrap();
        assert!((1978..=1990).contains(&year));
    }
}

#[tokio::test]
async fn test_year_bounds_usable_alone() {
    let backend = seeded_backend();

    let from = SiteFilter::new().with_years(Some(1982), None);
    let sites = backend.find_sites(&SiteQuery::new(from)).await.unwrap();
    assert_eq!(sites.len(), 3);
    assert!(sites.iter().all(|s| s.date_inscribed.unwrap() >= 1982));

    let to = SiteFilter::new().with_years(None, Some(1978));
    let sites = backend.find_sites(&SiteQuery::new(to)).await.unwrap();
    assert_eq!(sites.len(), 3);

    let exact = SiteFilter::new().inscribed_in(1979);
    let sites = backend.find_sites(&SiteQuery::new(exact)).await.unwrap();
    assert_eq!(names(&sites), vec!["Mont-Saint-Michel and its Bay"]);
}

#[tokio::test]
async fn test_transboundary_filter() {
    let backend = seeded_backend();

    let sites = backend
        .find_sites(&SiteQuery::new(SiteFilter::new().with_transboundary(true)))
        .await
        .unwrap();
    assert_eq!(names(&sites), vec!["Waterton Glacier International Peace Park"]);

    let local = backend
        .find_sites(&SiteQuery::new(SiteFilter::new().with_transboundary(false)))
        .await
        .unwrap();
    // The unplaced fixture has no transboundary value at all.
    assert_eq!(local.len(), 7);
}

#[tokio::test]
async fn test_criteria_filters() {
    let backend = seeded_backend();

    let both = SiteFilter::new().with_criteria_list("c1,n7");
    assert!(backend.find_sites(&SiteQuery::new(both)).await.unwrap().is_empty());

    let mixed = SiteFilter::new().with_criteria_list("c3,n7");
    let sites = backend.find_sites(&SiteQuery::new(mixed)).await.unwrap();
    assert_eq!(names(&sites), vec!["Tasmanian Wilderness"]);

    let malformed = SiteFilter::new().with_criteria_list("zz9");
    let sites = backend.find_sites(&SiteQuery::new(malformed)).await.unwrap();
    let all = backend.find_sites(&SiteQuery::all()).await.unwrap();
    assert_eq!(sites, all);
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_names_and_descriptions() {
    let backend = seeded_backend();

    let filter = SiteFilter::new().with_search("FOREST", SearchScope::NamesAndDescriptions);
    let sites = backend.find_sites(&SiteQuery::new(filter)).await.unwrap();
    assert_eq!(
        names(&sites),
        vec!["Yellowstone National Park", "Tasmanian Wilderness"]
    );
}

#[tokio::test]
async fn test_full_text_search_covers_justification_and_location() {
    let backend = seeded_backend();

    let narrow = SiteFilter::new().with_search("glacial", SearchScope::NamesAndDescriptions);
    assert!(backend.find_sites(&SiteQuery::new(narrow)).await.unwrap().is_empty());

    let full = SiteFilter::new().with_search("glacial", SearchScope::FullText);
    let sites = backend.find_sites(&SiteQuery::new(full)).await.unwrap();
    assert_eq!(names(&sites), vec!["Waterton Glacier International Peace Park"]);

    let by_region = SiteFilter::new().with_search("arab", SearchScope::FullText);
    let sites = backend.find_sites(&SiteQuery::new(by_region)).await.unwrap();
    assert_eq!(names(&sites), vec!["Old City of Jerusalem and its Walls"]);
}

#[tokio::test]
async fn test_search_wildcards_match_literally() {
    let backend = seeded_backend();

    let percent = SiteFilter::new().with_search("%", SearchScope::FullText);
    let sites = backend.find_sites(&SiteQuery::new(percent)).await.unwrap();
    assert_eq!(names(&sites), vec!["Test Garden 100% Wild"]);

    let underscore = SiteFilter::new().with_search("_", SearchScope::FullText);
    assert!(backend.find_sites(&SiteQuery::new(underscore)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_with_quote_is_bound_safely() {
    let backend = seeded_backend();
    let filter = SiteFilter::new().with_search("x' OR '1'='1", SearchScope::FullText);
    assert!(backend.find_sites(&SiteQuery::new(filter)).await.unwrap().is_empty());
}

// ============================================================================
// Detail Lookup
// ============================================================================

#[tokio::test]
async fn test_get_site_returns_full_record() {
    let backend = seeded_backend();

    let site = backend.get_site(26).await.unwrap().unwrap();
    assert_eq!(site.id_no, Some(26));
    assert_eq!(site.name_en, "Island of Gorée");
    assert_eq!(site.criterion(Criterion::C6), Some(1));
    assert_eq!(site.criterion(Criterion::C1), Some(0));
    assert_eq!(site.danger, Some(0));
    assert_eq!(site.longitude, Some(-17.39889));

    assert!(backend.get_site(4242).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_id_returns_first_in_table_order() {
    let backend = create_backend();
    let mut first = Site::new("First", "X");
    first.id_no = Some(7);
    let mut second = Site::new("Second", "Y");
    second.id_no = Some(7);
    backend.replace_sites(&[first, second]).unwrap();

    let site = backend.get_site(7).await.unwrap().unwrap();
    assert_eq!(site.name_en, "First");
}

// ============================================================================
// Lookups and Ordering
// ============================================================================

#[tokio::test]
async fn test_distinct_values_sorted_without_nulls() {
    let backend = seeded_backend();

    let countries = backend.distinct_values(DistinctField::Country).await.unwrap();
    assert_eq!(countries.len(), 9);
    let mut sorted = countries.clone();
    sorted.sort();
    assert_eq!(countries, sorted);

    let regions = backend.distinct_values(DistinctField::Region).await.unwrap();
    assert_eq!(
        regions,
        vec![
            "Africa",
            "Arab States",
            "Asia and the Pacific",
            "Europe and North America",
            "Latin America and the Caribbean",
        ]
    );

    let categories = backend.distinct_values(DistinctField::Category).await.unwrap();
    assert_eq!(categories, vec!["Cultural", "Mixed", "Natural"]);
}

#[tokio::test]
async fn test_blank_values_are_not_lookup_or_group_keys() {
    let backend = create_backend();
    backend
        .replace_sites(&[
            SiteFixture::new(1, "Blank", "").region("").category("").build(),
            SiteFixture::new(2, "Placed", "X")
                .region("Africa")
                .category("Natural")
                .build(),
        ])
        .unwrap();

    let countries = backend.distinct_values(DistinctField::Country).await.unwrap();
    assert_eq!(countries, vec!["X"]);
    let regions = backend.distinct_values(DistinctField::Region).await.unwrap();
    assert_eq!(regions, vec!["Africa"]);
    let categories = backend.distinct_values(DistinctField::Category).await.unwrap();
    assert_eq!(categories, vec!["Natural"]);

    let stats = backend.statistics().await.unwrap();
    assert_eq!(stats.total_sites, 2);
    assert_eq!(stats.sites_by_region.keys().collect::<Vec<_>>(), vec!["Africa"]);
    assert_eq!(stats.sites_by_category.keys().collect::<Vec<_>>(), vec!["Natural"]);
}

#[tokio::test]
async fn test_country_listing_exact_and_by_name() {
    let backend = create_backend();
    backend
        .replace_sites(&[
            Site::new("Zeta", "Peru"),
            Site::new("Alpha", "Peru"),
            Site::new("Beta", "Peru and Bolivia"),
        ])
        .unwrap();

    let query = SiteQuery::new(SiteFilter::new().with_country("Peru")).ordered_by(SiteOrder::Name);
    let sites = backend.find_sites(&query).await.unwrap();
    assert_eq!(names(&sites), vec!["Alpha", "Zeta"]);
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_statistics_over_fixtures() {
    let backend = seeded_backend();
    let stats = backend.statistics().await.unwrap();

    assert_eq!(stats.total_sites, 9);
    assert_eq!(stats.sites_in_danger, 2);
    assert_eq!(stats.transboundary_sites, 1);

    assert_eq!(stats.sites_by_category.get("Cultural"), Some(4));
    assert_eq!(stats.sites_by_category.get("Natural"), Some(3));
    assert_eq!(stats.sites_by_category.get("Mixed"), Some(1));
    assert!(stats.sites_by_category.total() <= stats.total_sites);

    let regions: Vec<_> = stats.sites_by_region.iter().collect();
    assert_eq!(
        regions,
        vec![
            ("Europe and North America", 3),
            ("Africa", 2),
            ("Arab States", 1),
            ("Asia and the Pacific", 1),
            ("Latin America and the Caribbean", 1),
        ]
    );

    let decades: Vec<_> = stats.sites_by_decade.iter().collect();
    assert_eq!(decades, vec![("1970s", 4), ("1980s", 3), ("1990s", 1)]);

    let criteria: Vec<_> = stats.criteria_counts.iter().collect();
    assert_eq!(
        criteria,
        vec![
            ("c1", 1),
            ("c2", 2),
            ("c3", 3),
            ("c4", 2),
            ("c5", 1),
            ("c6", 4),
            ("n7", 4),
            ("n8", 3),
            ("n9", 4),
            ("n10", 3),
        ]
    );

    let danger = backend
        .find_sites(&SiteQuery::new(SiteFilter::new().with_danger(true)))
        .await
        .unwrap();
    assert_eq!(stats.sites_in_danger, danger.len() as u64);
}

// ============================================================================
// Geospatial
// ============================================================================

#[tokio::test]
async fn test_geo_features_skip_unplaced_sites() {
    let backend = seeded_backend();
    let features = backend.geo_features(&SiteFilter::new()).await.unwrap();

    assert_eq!(features.len(), MAPPABLE_SITES);
    assert!(features.iter().all(|f| f.properties.id != Some(999)));
    assert_eq!(features[0].geometry.coordinates, [-17.39889, 14.66722]);
}

#[tokio::test]
async fn test_geo_filters_use_exact_match() {
    let backend = seeded_backend();

    let africa = backend
        .geo_features(&SiteFilter::new().with_region("Africa"))
        .await
        .unwrap();
    assert_eq!(africa.len(), 2);

    let partial = backend
        .geo_features(&SiteFilter::new().with_region("africa"))
        .await
        .unwrap();
    assert!(partial.is_empty());

    let n10 = backend
        .geo_features(&SiteFilter::new().with_criterion(Criterion::N10))
        .await
        .unwrap();
    assert_eq!(n10.len(), 3);
    assert!(n10.iter().all(|f| f.properties.criteria.n10));

    let danger = backend
        .geo_features(&SiteFilter::new().with_danger(true).with_category("Cultural"))
        .await
        .unwrap();
    assert_eq!(danger.len(), 2);
    assert!(danger.iter().all(|f| f.properties.danger));
}

// ============================================================================
// Health and Import
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let backend = create_backend();
    assert_eq!(backend.backend_name(), "sqlite");
    backend.health_check().await.unwrap();
}

#[tokio::test]
async fn test_import_csv_replaces_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sites.csv");
    std::fs::write(
        &path,
        "id_no,name_en,states_name_en,category_short,danger\n\
         5,Ancient Thebes,Egypt,Cultural,0\n\
         6,Kaziranga,India,Natural,\n",
    )
    .unwrap();

    let backend = seeded_backend();
    let rows = backend.import_csv(&path).unwrap();
    assert_eq!(rows, 2);

    let stats = backend.statistics().await.unwrap();
    assert_eq!(stats.total_sites, 2);
    let thebes = backend.get_site(5).await.unwrap().unwrap();
    assert_eq!(thebes.states_name_en, "Egypt");
}
