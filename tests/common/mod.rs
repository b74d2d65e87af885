//! Shared fixtures for integration tests
//!
//! Section fixtures mirror the host application's section-over-time feed for
//! one course offering across a quarter.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use course_lens::core::models::{
    CourseInfo, Grade, GradeRecord, Section, SectionInfo, SectionStatus, TimeLocation,
};

/// Build one section row.
#[allow(clippy::too_many_arguments)]
pub fn section(
    quarter: &str,
    course_id: &str,
    title: &str,
    enrolled_total: u32,
    max_enroll: u32,
    location: &str,
    days: &str,
    time: &str,
    instructors: &[&str],
    enroll_code: &str,
    status: SectionStatus,
) -> Section {
    Section {
        course_info: CourseInfo {
            quarter: quarter.to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
        },
        section: SectionInfo {
            enrolled_total,
            max_enroll,
            time_locations: vec![TimeLocation::new(location, days, time)],
            instructors: instructors.iter().map(ToString::to_string).collect(),
            enroll_code: enroll_code.to_string(),
            status,
        },
    }
}

/// Six sections of one course offering: the lecture plus its discussion
/// sections, one of them staffed by multiple instructors.
#[must_use]
pub fn six_sections() -> Vec<Section> {
    vec![
        section(
            "20222",
            "CMPSC 130A -1",
            "DATA STRUCT ALGOR",
            51,
            77,
            "PSYCH 1902",
            "T R",
            "9:30 AM - 10:45 AM",
            &["LOKSHTANOV D"],
            "08078",
            SectionStatus::Closed,
        ),
        section(
            "20222",
            "CMPSC 130A -2",
            "DATA STRUCT ALGOR",
            25,
            26,
            "GIRV 2128",
            "F",
            "9:00 AM - 9:50 AM",
            &["KILGORE J D"],
            "08086",
            SectionStatus::Closed,
        ),
        section(
            "20222",
            "CMPSC 130A -3",
            "DATA STRUCT ALGOR",
            26,
            26,
            "GIRV 2108",
            "F",
            "10:00 AM - 10:50 AM",
            &["DANESHAMOOZ J"],
            "08094",
            SectionStatus::Full,
        ),
        section(
            "20222",
            "CMPSC 130A -4",
            "DATA STRUCT ALGOR",
            0,
            26,
            "GIRV 1112",
            "F",
            "11:00 AM - 11:50 AM",
            &["YANG YIFAN"],
            "08102",
            SectionStatus::Cancelled,
        ),
        section(
            "20222",
            "CMPSC 130A -5",
            "DATA STRUCT ALGOR",
            20,
            26,
            "GIRV 2127",
            "F",
            "12:00 PM - 12:50 PM",
            &["KILGORE J D"],
            "08110",
            SectionStatus::Open,
        ),
        section(
            "20222",
            "CMPSC 130A -6",
            "DATA STRUCT ALGOR",
            24,
            26,
            "PHELP 1448",
            "F",
            "1:00 PM - 1:50 PM",
            &["DANESHAMOOZ J", "KILGORE J D", "YANG YIFAN"],
            "08128",
            SectionStatus::Open,
        ),
    ]
}

/// Five sections covering every enrollment status.
#[must_use]
pub fn five_sections() -> Vec<Section> {
    vec![
        section(
            "20224",
            "CMPSC 156 -1",
            "ADV APP PROGRAM",
            30,
            30,
            "SH 1431",
            "M W",
            "9:30 AM - 10:45 AM",
            &["CONRAD P"],
            "07005",
            SectionStatus::Waitlist,
        ),
        section(
            "20224",
            "CMPSC 156 -2",
            "ADV APP PROGRAM",
            84,
            80,
            "BUCHN 1920",
            "T R",
            "2:00 PM - 3:15 PM",
            &["CONRAD P"],
            "07013",
            SectionStatus::Closed,
        ),
        section(
            "20224",
            "CMPSC 156 -3",
            "ADV APP PROGRAM",
            21,
            21,
            "PHELP 3526",
            "F",
            "11:00 AM - 11:50 AM",
            &["GAUCHO T"],
            "07021",
            SectionStatus::Full,
        ),
        section(
            "20224",
            "CMPSC 156 -4",
            "ADV APP PROGRAM",
            0,
            21,
            "PHELP 3526",
            "F",
            "12:00 PM - 12:50 PM",
            &["GAUCHO T"],
            "07039",
            SectionStatus::Cancelled,
        ),
        section(
            "20224",
            "CMPSC 156 -5",
            "ADV APP PROGRAM",
            12,
            21,
            "PHELP 3526",
            "F",
            "1:00 PM - 1:50 PM",
            &["GAUCHO T"],
            "07047",
            SectionStatus::Open,
        ),
    ]
}

/// Grade history for one course across three offerings.
#[must_use]
pub fn grade_history() -> Vec<GradeRecord> {
    vec![
        GradeRecord::new("20212", "CONRAD P", Grade::A, 40),
        GradeRecord::new("20212", "CONRAD P", Grade::AMinus, 12),
        GradeRecord::new("20212", "CONRAD P", Grade::BPlus, 6),
        GradeRecord::new("20212", "CONRAD P", Grade::W, 2),
        GradeRecord::new("20222", "HOLLERER T", Grade::A, 28),
        GradeRecord::new("20222", "HOLLERER T", Grade::B, 14),
        GradeRecord::new("20222", "HOLLERER T", Grade::F, 1),
        GradeRecord::new("20224", "CONRAD P", Grade::APlus, 9),
        GradeRecord::new("20224", "CONRAD P", Grade::A, 31),
        GradeRecord::new("20224", "CONRAD P", Grade::NP, 3),
    ]
}
