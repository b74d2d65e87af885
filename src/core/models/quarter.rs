//! Quarter code parsing and display forms
//!
//! Quarter codes arrive as 5-character "yyyyq" strings: a 4-digit year
//! followed by a quarter digit (1=Winter, 2=Spring, 3=Summer, 4=Fall).
//! Malformed codes are a validation error, never a silent "undefined" label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic term within a year, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TermKind {
    /// Quarter digit 1
    Winter,
    /// Quarter digit 2
    Spring,
    /// Quarter digit 3
    Summer,
    /// Quarter digit 4
    Fall,
}

impl TermKind {
    /// Map a quarter digit to its term, if valid.
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Winter),
            '2' => Some(Self::Spring),
            '3' => Some(Self::Summer),
            '4' => Some(Self::Fall),
            _ => None,
        }
    }

    /// The quarter digit used in yyyyq codes.
    #[must_use]
    pub const fn digit(&self) -> char {
        match self {
            Self::Winter => '1',
            Self::Spring => '2',
            Self::Summer => '3',
            Self::Fall => '4',
        }
    }

    /// Full term name used in chart titles (e.g. "Fall").
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }

    /// Single-letter code used in the compact table form. Summer is "M".
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Winter => 'W',
            Self::Spring => 'S',
            Self::Summer => 'M',
            Self::Fall => 'F',
        }
    }
}

/// A validated quarter: year plus term, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quarter {
    /// 4-digit calendar year
    pub year: u16,
    /// Term within the year
    pub term: TermKind,
}

impl Quarter {
    /// Create a quarter from its parts
    #[must_use]
    pub const fn new(year: u16, term: TermKind) -> Self {
        Self { year, term }
    }

    /// Parse and validate a 5-character yyyyq code.
    ///
    /// # Errors
    ///
    /// Returns an error when the code is not exactly 5 characters, the year
    /// part is not numeric, or the quarter digit is outside 1..=4.
    pub fn parse(code: &str) -> Result<Self, String> {
        if !code.is_ascii() || code.len() != 5 {
            return Err(format!(
                "Invalid quarter code '{code}': expected 5 characters (yyyyq)"
            ));
        }

        let (year_part, digit_part) = code.split_at(4);
        let year: u16 = year_part
            .parse()
            .map_err(|_| format!("Invalid quarter code '{code}': year must be numeric"))?;

        let digit = digit_part
            .chars()
            .next()
            .ok_or_else(|| format!("Invalid quarter code '{code}': missing quarter digit"))?;
        let term = TermKind::from_digit(digit).ok_or_else(|| {
            format!("Invalid quarter code '{code}': quarter digit must be 1-4")
        })?;

        Ok(Self { year, term })
    }

    /// Long display form used in chart group titles (e.g. "Fall 2022").
    #[must_use]
    pub fn pretty(&self) -> String {
        format!("{} {}", self.term.name(), self.year)
    }

    /// Compact display form used in the sections table (e.g. "F22", "M23").
    #[must_use]
    pub fn qyy(&self) -> String {
        format!("{}{:02}", self.term.letter(), self.year % 100)
    }

    /// The raw 5-character code this quarter round-trips to.
    #[must_use]
    pub fn code(&self) -> String {
        format!("{}{}", self.year, self.term.digit())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

impl FromStr for Quarter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
