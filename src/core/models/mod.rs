//! Data models for grade history and section listings

pub mod grade;
pub mod quarter;
pub mod section;

pub use grade::{Grade, GradeRecord};
pub use quarter::{Quarter, TermKind};
pub use section::{CourseInfo, Section, SectionInfo, SectionStatus, TimeLocation};
