//! Display formatting for section table cells
//!
//! Pure functions mapping section sub-fields to the display strings the table
//! shows. All are total over well-formed input; only quarter codes can fail
//! validation.

use crate::core::models::{Quarter, SectionInfo, TimeLocation};

/// Format an enrollment fraction, e.g. `convert_to_fraction(51, 77)` -> "51/77".
#[must_use]
pub fn convert_to_fraction(enrolled_total: u32, max_enroll: u32) -> String {
    format!("{enrolled_total}/{max_enroll}")
}

/// Display label for a section's enrollment status.
#[must_use]
pub fn format_status(section: &SectionInfo) -> String {
    section.status.label().to_string()
}

/// Join one field across the ordered meeting list with single spaces,
/// skipping empty entries.
fn join_meeting_field<F>(time_locations: &[TimeLocation], field: F) -> String
where
    F: Fn(&TimeLocation) -> &str,
{
    time_locations
        .iter()
        .map(field)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All meeting locations of a section, space separated.
#[must_use]
pub fn format_location(time_locations: &[TimeLocation]) -> String {
    join_meeting_field(time_locations, |tl| &tl.location)
}

/// All meeting day patterns of a section, space separated.
#[must_use]
pub fn format_days(time_locations: &[TimeLocation]) -> String {
    join_meeting_field(time_locations, |tl| &tl.days)
}

/// All meeting time ranges of a section, space separated.
#[must_use]
pub fn format_time(time_locations: &[TimeLocation]) -> String {
    join_meeting_field(time_locations, |tl| &tl.time)
}

/// Instructor names joined with ", ", preserving input order.
#[must_use]
pub fn format_instructors(instructors: &[String]) -> String {
    instructors.join(", ")
}

/// Compact quarter display for the table ("S22"; Summer is "M").
///
/// # Errors
///
/// Returns an error if the quarter code is malformed.
pub fn format_quarter(yyyyq: &str) -> Result<String, String> {
    Quarter::parse(yyyyq).map(|quarter| quarter.qyy())
}

/// Strip the trailing 2-character section suffix from a course id
/// ("CMPSC 130A -1" -> "CMPSC 130A").
#[must_use]
pub fn format_course_id(course_id: &str) -> String {
    let total = course_id.chars().count();
    course_id
        .chars()
        .take(total.saturating_sub(2))
        .collect::<String>()
        .trim_end()
        .to_string()
}
