//! Report generation for grade history and section listings
//!
//! This module renders the grade-distribution chart and the sections table in
//! various formats (Markdown, HTML, plain text for the terminal).

pub mod formats;
pub mod text;
pub mod visualization;

use crate::core::grades::GradeGroup;
use crate::core::models::Section;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use text::TextRenderer;
pub use visualization::MermaidGenerator;

/// Data context for report generation
///
/// Aggregates everything needed to render a report, providing a single source
/// of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report title
    pub title: &'a str,
    /// Aggregated grade-distribution groups, most recent quarter first
    pub grade_groups: &'a [GradeGroup],
    /// Section listing rows
    pub sections: &'a [Section],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        title: &'a str,
        grade_groups: &'a [GradeGroup],
        sections: &'a [Section],
    ) -> Self {
        Self {
            title,
            grade_groups,
            sections,
        }
    }

    /// Number of grade-distribution groups
    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.grade_groups.len()
    }

    /// Number of section rows
    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether any grade history is present
    #[must_use]
    pub const fn has_grades(&self) -> bool {
        !self.grade_groups.is_empty()
    }

    /// Whether any sections are present
    #[must_use]
    pub const fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
