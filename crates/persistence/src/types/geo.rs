//! GeoJSON point features for map clients.

use serde::{Deserialize, Serialize};

use super::criterion::CriteriaFlags;
use super::site::Site;

/// A GeoJSON `Point` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    /// Always `"Point"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`, in that order.
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    /// Creates a point from longitude and latitude.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    /// Returns the longitude.
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Returns the latitude.
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Properties attached to each site feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProperties {
    /// Official site number.
    pub id: Option<i64>,
    /// English name.
    pub name: String,
    /// Short category code.
    pub category: Option<String>,
    /// States Parties in English.
    pub country: String,
    /// UNESCO region in English.
    pub region: Option<String>,
    /// Whether the site is on the List in Danger.
    pub danger: bool,
    /// Whether the site spans several countries.
    pub transboundary: bool,
    /// The ten criterion flags.
    pub criteria: CriteriaFlags,
}

/// A GeoJSON `Feature` for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The site location.
    pub geometry: PointGeometry,
    /// Descriptive properties.
    pub properties: GeoProperties,
}

impl GeoFeature {
    /// Builds a feature from a site record.
    ///
    /// Returns `None` when either coordinate is missing; such sites cannot be
    /// placed on a map.
    pub fn from_site(site: &Site) -> Option<Self> {
        let (longitude, latitude) = site.coordinates()?;
        Some(Self {
            kind: "Feature".to_string(),
            geometry: PointGeometry::new(longitude, latitude),
            properties: GeoProperties {
                id: site.id_no,
                name: site.name_en.clone(),
                category: site.category_short.clone(),
                country: site.states_name_en.clone(),
                region: site.region_en.clone(),
                danger: site.is_in_danger(),
                transboundary: site.is_transboundary(),
                criteria: site.criteria_flags(),
            },
        })
    }
}
