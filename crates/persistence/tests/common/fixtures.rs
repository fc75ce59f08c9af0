//! Site fixtures shared by the persistence integration tests.
//!
//! The dataset is small but covers every filter dimension: two sites in
//! danger, one transboundary site, three categories, five regions, three
//! inscription decades and one site without coordinates, category, region or
//! inscription year.

use heritage_persistence::types::{Criterion, Site};

/// Builder for a single site record.
#[derive(Debug, Clone)]
pub struct SiteFixture {
    site: Site,
}

impl SiteFixture {
    /// Creates a fixture with every flag set to 0.
    pub fn new(id_no: i64, name: &str, country: &str) -> Self {
        let mut site = Site::new(name, country);
        site.id_no = Some(id_no);
        site.unique_number = Some(id_no + 1000);
        site.danger = Some(0);
        site.transboundary = Some(0);
        for criterion in Criterion::ALL {
            site.set_criterion(criterion, Some(0));
        }
        Self { site }
    }

    /// Sets the short and long category.
    pub fn category(mut self, category: &str) -> Self {
        self.site.category = Some(category.to_string());
        self.site.category_short = Some(category.to_string());
        self
    }

    /// Sets the region.
    pub fn region(mut self, region: &str) -> Self {
        self.site.region_en = Some(region.to_string());
        self
    }

    /// Sets the inscription year.
    pub fn inscribed(mut self, year: i64) -> Self {
        self.site.date_inscribed = Some(year);
        self
    }

    /// Sets the coordinates.
    pub fn located(mut self, longitude: f64, latitude: f64) -> Self {
        self.site.longitude = Some(longitude);
        self.site.latitude = Some(latitude);
        self
    }

    /// Marks the given criteria as satisfied.
    pub fn criteria(mut self, criteria: &[Criterion]) -> Self {
        for criterion in criteria {
            self.site.set_criterion(*criterion, Some(1));
        }
        self
    }

    /// Sets an English short description.
    pub fn described(mut self, text: &str) -> Self {
        self.site.short_description_en = Some(text.to_string());
        self
    }

    /// Sets an English justification.
    pub fn justified(mut self, text: &str) -> Self {
        self.site.justification_en = Some(text.to_string());
        self
    }

    /// Puts the site on the List in Danger.
    pub fn in_danger(mut self) -> Self {
        self.site.danger = Some(1);
        self
    }

    /// Marks the site as spanning several countries.
    pub fn transboundary(mut self) -> Self {
        self.site.transboundary = Some(1);
        self
    }

    /// Returns the record.
    pub fn build(self) -> Site {
        self.site
    }
}

/// Returns the fixture dataset in table order.
pub fn heritage_sites() -> Vec<Site> {
    use Criterion::*;

    vec![
        SiteFixture::new(26, "Island of Gorée", "Senegal")
            .category("Cultural")
            .region("Africa")
            .inscribed(1978)
            .located(-17.39889, 14.66722)
            .criteria(&[C6])
            .described("The island of Gorée lies off the coast of Senegal, opposite Dakar.")
            .build(),
        SiteFixture::new(1, "Galápagos Islands", "Ecuador")
            .category("Natural")
            .region("Latin America and the Caribbean")
            .inscribed(1978)
            .located(-90.5, -0.68)
            .criteria(&[N7, N8, N9, N10])
            .described("Situated in the Pacific Ocean, a living museum of evolution.")
            .build(),
        SiteFixture::new(28, "Yellowstone National Park", "United States of America")
            .category("Natural")
            .region("Europe and North America")
            .inscribed(1978)
            .located(-110.5, 44.6)
            .criteria(&[N7, N8, N9, N10])
            .described("Geysers, hot springs and a vast natural forest.")
            .build(),
        SiteFixture::new(119, "Timbuktu", "Mali")
            .category("Cultural")
            .region("Africa")
            .inscribed(1988)
            .located(-3.0, 16.77)
            .criteria(&[C2, C4, C5])
            .described("Home of the prestigious Koranic Sankore University.")
            .in_danger()
            .build(),
        SiteFixture::new(80, "Mont-Saint-Michel and its Bay", "France")
            .category("Cultural")
            .region("Europe and North America")
            .inscribed(1979)
            .located(-1.51, 48.63)
            .criteria(&[C1, C3, C6])
            .described("Perched on a rocky islet amid vast sandbanks.")
            .build(),
        SiteFixture::new(181, "Tasmanian Wilderness", "Australia")
            .category("Mixed")
            .region("Asia and the Pacific")
            .inscribed(1982)
            .located(146.0, -42.0)
            .criteria(&[C3, C4, C6, N7, N8, N9, N10])
            .described("One of the last expanses of temperate rainforest.")
            .build(),
        SiteFixture::new(148, "Old City of Jerusalem and its Walls", "Jerusalem (Site proposed by Jordan)")
            .category("Cultural")
            .region("Arab States")
            .inscribed(1981)
            .located(35.23, 31.78)
            .criteria(&[C2, C3, C6])
            .described("A holy city for Judaism, Christianity and Islam.")
            .in_danger()
            .build(),
        SiteFixture::new(354, "Waterton Glacier International Peace Park", "Canada,United States of America")
            .category("Natural")
            .region("Europe and North America")
            .inscribed(1995)
            .located(-113.9, 48.9)
            .criteria(&[N7, N9])
            .justified("Outstanding scenery and glacial landforms.")
            .transboundary()
            .build(),
        {
            let mut site = Site::new("Test Garden 100% Wild", "Italy");
            site.id_no = Some(999);
            site.danger = Some(0);
            site
        },
    ]
}

/// Number of fixture sites with both coordinates.
pub const MAPPABLE_SITES: usize = 8;
