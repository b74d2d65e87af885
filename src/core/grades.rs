//! Grade distribution aggregation
//!
//! Turns the flat per-section grade feed into ordered per-offering chart
//! groups: records are grouped by (quarter, instructor), every one of the 15
//! grade buckets is present in every group (zero-count when absent), and
//! groups are ordered by most recent quarter first.

use crate::core::models::{Grade, GradeRecord, Quarter};
use std::collections::HashMap;

/// One chart bar: a grade bucket with its count and share of the group total.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeBar {
    /// Grade bucket
    pub grade: Grade,
    /// Students who received the grade
    pub count: u32,
    /// Share of the group total in percent; 0.0 when the group is empty
    pub percentage: f64,
}

/// Grade distribution for one (quarter, instructor) offering.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeGroup {
    /// Quarter the offering ran
    pub quarter: Quarter,
    /// Instructor of record
    pub instructor: String,
    /// Chart title, e.g. "Fall 2022 - Smith"
    pub title: String,
    /// Exactly one bar per grade bucket, in `Grade::ALL` order
    pub bars: Vec<GradeBar>,
}

impl GradeGroup {
    /// Total number of grades counted in this group.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.bars.iter().map(|bar| bar.count).sum()
    }
}

/// Per-group accumulator used while scanning the sorted feed.
struct GroupAcc {
    quarter: Quarter,
    instructor: String,
    counts: HashMap<Grade, u32>,
}

impl GroupAcc {
    fn into_group(self) -> GradeGroup {
        let total: u32 = self.counts.values().sum();

        let bars = Grade::ALL
            .iter()
            .map(|&grade| {
                let count = self.counts.get(&grade).copied().unwrap_or(0);
                let percentage = if total > 0 {
                    f64::from(count) / f64::from(total) * 100.0
                } else {
                    0.0
                };
                GradeBar {
                    grade,
                    count,
                    percentage,
                }
            })
            .collect();

        let title = format!("{} - {}", self.quarter.pretty(), self.instructor);

        GradeGroup {
            quarter: self.quarter,
            instructor: self.instructor,
            title,
            bars,
        }
    }
}

/// Aggregate a flat grade-history feed into ordered chart groups.
///
/// Groups are keyed by (quarter, instructor) so different instructors of the
/// same quarter chart separately. Ordering is most recent quarter first
/// (year descending, then Fall > Summer > Spring > Winter); records within
/// the same quarter keep their input order, so group positions for equal
/// quarters follow first appearance.
///
/// Within a group, a later record for the same grade replaces an earlier one;
/// the feed carries one record per grade per offering.
///
/// # Errors
///
/// Returns an error if any record carries a malformed yyyyq code.
pub fn aggregate_grade_history(records: &[GradeRecord]) -> Result<Vec<GradeGroup>, String> {
    // Validate every quarter code up front
    let mut parsed: Vec<(Quarter, &GradeRecord)> = records
        .iter()
        .map(|record| Quarter::parse(&record.yyyyq).map(|quarter| (quarter, record)))
        .collect::<Result<_, _>>()?;

    // Most recent quarter first; the sort is stable, so ties keep input order
    parsed.sort_by(|a, b| b.0.cmp(&a.0));

    let mut groups: Vec<GroupAcc> = Vec::new();
    let mut index: HashMap<(Quarter, String), usize> = HashMap::new();

    for (quarter, record) in parsed {
        let key = (quarter, record.instructor.clone());
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(GroupAcc {
                quarter,
                instructor: record.instructor.clone(),
                counts: HashMap::new(),
            });
            groups.len() - 1
        });

        groups[idx].counts.insert(record.grade, record.count);
    }

    Ok(groups.into_iter().map(GroupAcc::into_group).collect())
}
