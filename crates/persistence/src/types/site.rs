//! Site records and their projections.
//!
//! [`Site`] is one full row of the site table and is what the detail lookup
//! returns. Listings return the narrower [`SiteSummary`] projection.

use serde::{Deserialize, Serialize};

use super::criterion::{CriteriaFlags, Criterion};

/// A full World Heritage Site record (every column of the table).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Row identity in the source export.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub unique_number: Option<i64>,
    /// Official site number, used for detail lookups.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_no: Option<i64>,
    /// Revision marker (e.g. `Rev`, `Bis`).
    #[serde(default)]
    pub rev_bis: Option<String>,
    /// English name.
    #[serde(default)]
    pub name_en: String,
    /// French name.
    #[serde(default)]
    pub name_fr: Option<String>,
    /// English short description.
    #[serde(default)]
    pub short_description_en: Option<String>,
    /// French short description.
    #[serde(default)]
    pub short_description_fr: Option<String>,
    /// English justification of inscription.
    #[serde(default)]
    pub justification_en: Option<String>,
    /// French justification of inscription.
    #[serde(default)]
    pub justification_fr: Option<String>,
    /// Year of inscription.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub date_inscribed: Option<i64>,
    /// Years of extensions or modifications.
    #[serde(default)]
    pub secondary_dates: Option<String>,
    /// 1 when the site is on the List in Danger.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub danger: Option<i64>,
    /// End year for delisted sites.
    #[serde(default)]
    pub date_end: Option<f64>,
    /// Danger listing history.
    #[serde(default)]
    pub danger_list: Option<String>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Protected area in hectares.
    #[serde(default)]
    pub area_hectares: Option<f64>,
    /// Criterion (i).
    #[serde(default, alias = "C1", deserialize_with = "lenient::opt_i64")]
    pub c1: Option<i64>,
    /// Criterion (ii).
    #[serde(default, alias = "C2", deserialize_with = "lenient::opt_i64")]
    pub c2: Option<i64>,
    /// Criterion (iii).
    #[serde(default, alias = "C3", deserialize_with = "lenient::opt_i64")]
    pub c3: Option<i64>,
    /// Criterion (iv).
    #[serde(default, alias = "C4", deserialize_with = "lenient::opt_i64")]
    pub c4: Option<i64>,
    /// Criterion (v).
    #[serde(default, alias = "C5", deserialize_with = "lenient::opt_i64")]
    pub c5: Option<i64>,
    /// Criterion (vi).
    #[serde(default, alias = "C6", deserialize_with = "lenient::opt_i64")]
    pub c6: Option<i64>,
    /// Criterion (vii).
    #[serde(default, alias = "N7", deserialize_with = "lenient::opt_i64")]
    pub n7: Option<i64>,
    /// Criterion (viii).
    #[serde(default, alias = "N8", deserialize_with = "lenient::opt_i64")]
    pub n8: Option<i64>,
    /// Criterion (ix).
    #[serde(default, alias = "N9", deserialize_with = "lenient::opt_i64")]
    pub n9: Option<i64>,
    /// Criterion (x).
    #[serde(default, alias = "N10", deserialize_with = "lenient::opt_i64")]
    pub n10: Option<i64>,
    /// Criteria as written on the List, e.g. `(iii)(vi)`.
    #[serde(default)]
    pub criteria_txt: Option<String>,
    /// Category in full.
    #[serde(default)]
    pub category: Option<String>,
    /// Short category code: Cultural, Natural or Mixed.
    #[serde(default)]
    pub category_short: Option<String>,
    /// States Parties in English.
    #[serde(default)]
    pub states_name_en: String,
    /// States Parties in French.
    #[serde(default)]
    pub states_name_fr: Option<String>,
    /// UNESCO region in English.
    #[serde(default)]
    pub region_en: Option<String>,
    /// UNESCO region in French.
    #[serde(default)]
    pub region_fr: Option<String>,
    /// ISO country codes.
    #[serde(default)]
    pub iso_code: Option<String>,
    /// UNDP country codes.
    #[serde(default)]
    pub udnp_code: Option<String>,
    /// 1 when the site spans more than one country.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub transboundary: Option<i64>,
}

impl Site {
    /// Creates a site with the two required text fields set.
    pub fn new(name_en: impl Into<String>, states_name_en: impl Into<String>) -> Self {
        Self {
            name_en: name_en.into(),
            states_name_en: states_name_en.into(),
            ..Default::default()
        }
    }

    /// Returns the stored flag value for a criterion.
    pub fn criterion(&self, criterion: Criterion) -> Option<i64> {
        match criterion {
            Criterion::C1 => self.c1,
            Criterion::C2 => self.c2,
            Criterion::C3 => self.c3,
            Criterion::C4 => self.c4,
            Criterion::C5 => self.c5,
            Criterion::C6 => self.c6,
            Criterion::N7 => self.n7,
            Criterion::N8 => self.n8,
            Criterion::N9 => self.n9,
            Criterion::N10 => self.n10,
        }
    }

    /// Sets the flag value for a criterion.
    pub fn set_criterion(&mut self, criterion: Criterion, value: Option<i64>) {
        let slot = match criterion {
            Criterion::C1 => &mut self.c1,
            Criterion::C2 => &mut self.c2,
            Criterion::C3 => &mut self.c3,
            Criterion::C4 => &mut self.c4,
            Criterion::C5 => &mut self.c5,
            Criterion::C6 => &mut self.c6,
            Criterion::N7 => &mut self.n7,
            Criterion::N8 => &mut self.n8,
            Criterion::N9 => &mut self.n9,
            Criterion::N10 => &mut self.n10,
        };
        *slot = value;
    }

    /// Returns all criterion flags as booleans.
    pub fn criteria_flags(&self) -> CriteriaFlags {
        Criterion::ALL
            .into_iter()
            .filter(|criterion| self.criterion(*criterion) == Some(1))
            .collect()
    }

    /// Returns true when the site is on the List in Danger.
    pub fn is_in_danger(&self) -> bool {
        self.danger == Some(1)
    }

    /// Returns true when the site spans several countries.
    pub fn is_transboundary(&self) -> bool {
        self.transboundary == Some(1)
    }

    /// Returns the coordinate pair when both halves are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.longitude.zip(self.latitude)
    }

    /// Returns the listing projection of this record.
    pub fn summary(&self) -> SiteSummary {
        SiteSummary {
            unique_number: self.unique_number,
            id_no: self.id_no,
            rev_bis: self.rev_bis.clone(),
            name_en: self.name_en.clone(),
            name_fr: self.name_fr.clone(),
            short_description_en: self.short_description_en.clone(),
            short_description_fr: self.short_description_fr.clone(),
            longitude: self.longitude,
            latitude: self.latitude,
            category: self.category.clone(),
            category_short: self.category_short.clone(),
            states_name_en: self.states_name_en.clone(),
            region_en: self.region_en.clone(),
            date_inscribed: self.date_inscribed,
        }
    }
}

/// The listing projection of a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    /// Row identity in the source export.
    pub unique_number: Option<i64>,
    /// Official site number.
    pub id_no: Option<i64>,
    /// Revision marker.
    pub rev_bis: Option<String>,
    /// English name.
    pub name_en: String,
    /// French name.
    pub name_fr: Option<String>,
    /// English short description.
    pub short_description_en: Option<String>,
    /// French short description.
    pub short_description_fr: Option<String>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Category in full.
    pub category: Option<String>,
    /// Short category code.
    pub category_short: Option<String>,
    /// States Parties in English.
    pub states_name_en: String,
    /// UNESCO region in English.
    pub region_en: Option<String>,
    /// Year of inscription.
    pub date_inscribed: Option<i64>,
}

/// Columns whose distinct values can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    /// `states_name_en`
    Country,
    /// `region_en`
    Region,
    /// `category_short`
    Category,
}

impl DistinctField {
    /// Returns the backing column name.
    pub fn column(self) -> &'static str {
        match self {
            DistinctField::Country => "states_name_en",
            DistinctField::Region => "region_en",
            DistinctField::Category => "category_short",
        }
    }
}

/// Deserializers that tolerate spreadsheet-style numbers.
///
/// Spreadsheet exports write integer columns containing blanks as floats
/// (`1979.0`), and CSV cells arrive as text.
mod lenient {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};

    /// Deserializes an optional integer from an integer, an integral float,
    /// a numeric string, a boolean, or an empty value.
    pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalInt)
    }

    struct OptionalInt;

    impl<'de> Visitor<'de> for OptionalInt {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer, an integral float, or nothing")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(OptionalInt)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(i64::from(v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("integer {} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.is_nan() {
                return Ok(None);
            }
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
                Ok(Some(v as i64))
            } else {
                Err(E::custom(format!("expected an integer, found {}", v)))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(None);
            }
            if let Ok(i) = v.parse::<i64>() {
                return Ok(Some(i));
            }
            match v.parse::<f64>() {
                Ok(f) => self.visit_f64(f),
                Err(_) => Err(E::custom(format!("expected an integer, found '{}'", v))),
            }
        }
    }
}
