//! Summary statistics over the site table.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered mapping from a group key to a count.
///
/// Serializes as a JSON object whose keys keep insertion order, so an
/// ordering chosen by the query (count descending, decade ascending) is what
/// clients see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap(Vec<(String, u64)>);

impl CountMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group.
    pub fn push(&mut self, key: impl Into<String>, count: u64) {
        self.0.push((key.into(), count));
    }

    /// Returns the count for a key.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Returns the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(key, count)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, v)| v).sum()
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no groups.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for CountMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CountMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountMapVisitor;

        impl<'de> Visitor<'de> for CountMapVisitor {
            type Value = CountMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<CountMap, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, count)) = access.next_entry::<String, u64>()? {
                    entries.push((key, count));
                }
                Ok(CountMap(entries))
            }
        }

        deserializer.deserialize_map(CountMapVisitor)
    }
}

/// The fixed set of aggregates served by the statistics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStatistics {
    /// Number of rows in the table.
    pub total_sites: u64,
    /// Count per short category, null categories excluded.
    pub sites_by_category: CountMap,
    /// Count per region, largest first, null regions excluded.
    pub sites_by_region: CountMap,
    /// Sites with `danger = 1`.
    pub sites_in_danger: u64,
    /// Sites with `transboundary = 1`.
    pub transboundary_sites: u64,
    /// Count per criterion, `c1` through `n10`.
    pub criteria_counts: CountMap,
    /// Count per inscription decade (`"1970s"`), oldest first.
    pub sites_by_decade: CountMap,
}

/// Returns the decade bucket label for an inscription year.
///
/// Uses floor division so the label is correct for negative years too.
pub fn decade_label(year: i64) -> String {
    format!("{}s", year.div_euclid(10) * 10)
}
