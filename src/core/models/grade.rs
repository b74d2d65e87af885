//! Grade history models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 15 fixed grade/status labels tracked per course offering.
///
/// The set is closed: grade feeds carrying any other label are rejected at
/// deserialization instead of being silently counted without a chart bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A+
    #[serde(rename = "A+")]
    APlus,
    /// A
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// C+
    #[serde(rename = "C+")]
    CPlus,
    /// C
    C,
    /// C-
    #[serde(rename = "C-")]
    CMinus,
    /// D+
    #[serde(rename = "D+")]
    DPlus,
    /// D
    D,
    /// D-
    #[serde(rename = "D-")]
    DMinus,
    /// F
    F,
    /// Withdrawn
    W,
    /// No pass
    NP,
}

impl Grade {
    /// All tracked grade buckets in canonical display order (best to worst,
    /// then withdrawal/no-pass statuses).
    pub const ALL: [Self; 15] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
        Self::W,
        Self::NP,
    ];

    /// Display label for this grade (the external spelling, e.g. "A+").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
            Self::W => "W",
            Self::NP => "NP",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|grade| grade.label() == s)
            .copied()
            .ok_or_else(|| format!("Unknown grade label: '{s}'"))
    }
}

/// One per-section grade-distribution record as supplied by the external
/// grade-history feed. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Quarter code: 4-digit year followed by a quarter digit (e.g. "20224")
    pub yyyyq: String,

    /// Instructor name as reported by the registrar
    pub instructor: String,

    /// Grade bucket this record counts
    pub grade: Grade,

    /// Number of students who received the grade
    pub count: u32,
}

impl GradeRecord {
    /// Create a new grade record
    #[must_use]
    pub fn new(yyyyq: &str, instructor: &str, grade: Grade, count: u32) -> Self {
        Self {
            yyyyq: yyyyq.to_string(),
            instructor: instructor.to_string(),
            grade,
            count,
        }
    }
}
