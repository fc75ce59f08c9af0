//! UNESCO selection criteria.
//!
//! A site satisfies any number of the ten official criteria: six cultural
//! (`c1`..`c6`) and four natural (`n7`..`n10`). Each criterion is stored as an
//! independent 0/1 column named after its code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the ten UNESCO selection criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Masterpiece of human creative genius.
    C1,
    /// Interchange of human values.
    C2,
    /// Testimony to a cultural tradition.
    C3,
    /// Outstanding type of building, ensemble or landscape.
    C4,
    /// Traditional human settlement or land-use.
    C5,
    /// Association with events, traditions, ideas or beliefs.
    C6,
    /// Superlative natural phenomena or natural beauty.
    N7,
    /// Major stages of Earth's history.
    N8,
    /// Ecological and biological processes.
    N9,
    /// Natural habitats for biological diversity.
    N10,
}

/// Whether a criterion is cultural or natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Criteria i-vi.
    Cultural,
    /// Criteria vii-x.
    Natural,
}

impl Criterion {
    /// All criteria in column order.
    pub const ALL: [Criterion; 10] = [
        Criterion::C1,
        Criterion::C2,
        Criterion::C3,
        Criterion::C4,
        Criterion::C5,
        Criterion::C6,
        Criterion::N7,
        Criterion::N8,
        Criterion::N9,
        Criterion::N10,
    ];

    /// Returns the criterion code, which is also its column name.
    pub fn code(self) -> &'static str {
        match self {
            Criterion::C1 => "c1",
            Criterion::C2 => "c2",
            Criterion::C3 => "c3",
            Criterion::C4 => "c4",
            Criterion::C5 => "c5",
            Criterion::C6 => "c6",
            Criterion::N7 => "n7",
            Criterion::N8 => "n8",
            Criterion::N9 => "n9",
            Criterion::N10 => "n10",
        }
    }

    /// Returns the column holding this criterion's flag.
    pub fn column(self) -> &'static str {
        self.code()
    }

    /// Returns whether the criterion is cultural or natural.
    pub fn kind(self) -> CriterionKind {
        match self {
            Criterion::C1
            | Criterion::C2
            | Criterion::C3
            | Criterion::C4
            | Criterion::C5
            | Criterion::C6 => CriterionKind::Cultural,
            Criterion::N7 | Criterion::N8 | Criterion::N9 | Criterion::N10 => {
                CriterionKind::Natural
            }
        }
    }

    /// Returns the short official description of the criterion.
    pub fn description(self) -> &'static str {
        match self {
            Criterion::C1 => "Represents a masterpiece of human creative genius",
            Criterion::C2 => "Exhibits an important interchange of human values",
            Criterion::C3 => "Bears a unique or exceptional testimony to a cultural tradition",
            Criterion::C4 => "Outstanding example of a type of building, architecture or landscape",
            Criterion::C5 => "Outstanding example of a traditional human settlement or land-use",
            Criterion::C6 => "Associated with events or living traditions, ideas, or beliefs",
            Criterion::N7 => "Contains superlative natural phenomena or exceptional natural beauty",
            Criterion::N8 => "Outstanding example representing major stages of Earth's history",
            Criterion::N9 => {
                "Outstanding example representing significant ecological and biological processes"
            }
            Criterion::N10 => {
                "Contains the most important natural habitats for conservation of biological diversity"
            }
        }
    }

    /// Parses a single criterion token such as `c3` or ` N10 `.
    ///
    /// The prefix selects the family and the number must fall inside that
    /// family's range: `c1`..`c6` or `n7`..`n10`. Anything else yields `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        let mut chars = token.chars();
        let prefix = chars.next()?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u32 = digits.parse().ok()?;

        match (prefix, number) {
            ('c', 1) => Some(Criterion::C1),
            ('c', 2) => Some(Criterion::C2),
            ('c', 3) => Some(Criterion::C3),
            ('c', 4) => Some(Criterion::C4),
            ('c', 5) => Some(Criterion::C5),
            ('c', 6) => Some(Criterion::C6),
            ('n', 7) => Some(Criterion::N7),
            ('n', 8) => Some(Criterion::N8),
            ('n', 9) => Some(Criterion::N9),
            ('n', 10) => Some(Criterion::N10),
            _ => None,
        }
    }

    /// Parses a comma-separated list of criterion tokens.
    ///
    /// Tokens that do not name a criterion are skipped without error, and
    /// repeated criteria are kept once. Order of first appearance is preserved.
    pub fn parse_list(list: &str) -> Vec<Self> {
        let mut criteria = Vec::new();
        for token in list.split(',') {
            match Criterion::parse(token) {
                Some(criterion) if !criteria.contains(&criterion) => criteria.push(criterion),
                Some(_) => {}
                None => {
                    if !token.trim().is_empty() {
                        tracing::debug!(token = %token.trim(), "Ignoring unrecognized criterion token");
                    }
                }
            }
        }
        criteria
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::parse(s).ok_or_else(|| ValidationError::UnknownCriterion {
            code: s.trim().to_string(),
        })
    }
}

/// The ten criterion flags of one site as booleans.
///
/// Serializes to an object with exactly ten keys, `c1` through `n10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct CriteriaFlags {
    pub c1: bool,
    pub c2: bool,
    pub c3: bool,
    pub c4: bool,
    pub c5: bool,
    pub c6: bool,
    pub n7: bool,
    pub n8: bool,
    pub n9: bool,
    pub n10: bool,
}

impl CriteriaFlags {
    /// Returns whether the given criterion is set.
    pub fn get(&self, criterion: Criterion) -> bool {
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

    /// Sets the given criterion.
    pub fn set(&mut self, criterion: Criterion, value: bool) {
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

    /// Returns the criteria that are set, in column order.
    pub fn satisfied(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|criterion| self.get(*criterion))
            .collect()
    }
}

impl FromIterator<Criterion> for CriteriaFlags {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        let mut flags = CriteriaFlags::default();
        for criterion in iter {
            flags.set(criterion, true);
        }
        flags
    }
}
