//! Section listing models
//!
//! Read-only display projections of course sections as supplied by the host
//! application. Field names follow the external JSON shape (camelCase).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enrollment status of a section, in the external status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStatus {
    /// Seats available
    Open,
    /// Registration closed
    Closed,
    /// At or over enrollment capacity
    Full,
    /// Offering cancelled
    Cancelled,
    /// Waitlist only
    Waitlist,
}

impl SectionStatus {
    /// Display label shown in the Status column.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Full => "Full",
            Self::Cancelled => "Cancelled",
            Self::Waitlist => "Waitlist",
        }
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One meeting time and place of a section. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLocation {
    /// Building and room (e.g. "PHELP 1448")
    #[serde(default)]
    pub location: String,
    /// Meeting days (e.g. "T R")
    #[serde(default)]
    pub days: String,
    /// Meeting time range (e.g. "9:30 AM - 10:45 AM")
    #[serde(default)]
    pub time: String,
}

impl TimeLocation {
    /// Create a new meeting time/place
    #[must_use]
    pub fn new(location: &str, days: &str, time: &str) -> Self {
        Self {
            location: location.to_string(),
            days: days.to_string(),
            time: time.to_string(),
        }
    }
}

/// Course-level metadata attached to each section row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    /// Quarter code of the offering (yyyyq, e.g. "20222")
    pub quarter: String,
    /// Course identifier including the 2-character section suffix
    /// (e.g. "CMPSC 130A -1")
    pub course_id: String,
    /// Course title
    pub title: String,
}

/// Per-section enrollment and scheduling details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInfo {
    /// Students currently enrolled
    pub enrolled_total: u32,
    /// Enrollment capacity
    pub max_enroll: u32,
    /// Ordered meeting times and places
    #[serde(default)]
    pub time_locations: Vec<TimeLocation>,
    /// Ordered instructor names
    #[serde(default)]
    pub instructors: Vec<String>,
    /// Registrar enrollment code (e.g. "08078")
    pub enroll_code: String,
    /// Enrollment status
    pub status: SectionStatus,
}

/// One scheduled section of a course offering: course metadata plus the
/// section's enrollment and meeting details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Course-level metadata
    pub course_info: CourseInfo,
    /// Section-level details
    pub section: SectionInfo,
}
