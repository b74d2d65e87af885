//! Markdown report generator
//!
//! Generates grade-history reports in Markdown format with embedded Mermaid
//! bar charts. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::sections::{RenderedTable, SectionsTable};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> Result<String, String> {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", ctx.title);
        output = output.replace("{{group_count}}", &ctx.group_count().to_string());
        output = output.replace("{{section_count}}", &ctx.section_count().to_string());

        let grade_charts = Self::generate_grade_charts(ctx);
        output = output.replace("{{grade_charts}}", &grade_charts);

        let sections_table = Self::generate_sections_table(ctx)?;
        output = output.replace("{{sections_table}}", &sections_table);

        Ok(output)
    }

    /// Generate one chart block per grade group: Mermaid bar chart plus a
    /// bucket table with exact counts.
    fn generate_grade_charts(ctx: &ReportContext) -> String {
        if !ctx.has_grades() {
            return "_No grade history available._\n".to_string();
        }

        let mut charts = String::new();

        for group in ctx.grade_groups {
            let _ = writeln!(charts, "### {}\n", group.title);
            charts.push_str(&MermaidGenerator::generate_grade_chart(group));
            charts.push('\n');

            charts.push_str("| Grade | Count | Percent |\n");
            charts.push_str("|---|---|---|\n");
            for bar in &group.bars {
                let _ = writeln!(
                    charts,
                    "| {} | {} | {:.2}% |",
                    bar.grade, bar.count, bar.percentage
                );
            }
            charts.push('\n');
        }

        charts
    }

    /// Generate the sections table
    fn generate_sections_table(ctx: &ReportContext) -> Result<String, String> {
        if !ctx.has_sections() {
            return Ok("_No sections available._\n".to_string());
        }

        let rendered = SectionsTable::render(ctx.sections)?;
        let headers = RenderedTable::headers();

        let mut table = String::new();
        let _ = writeln!(table, "| {} |", headers.join(" | "));
        let _ = writeln!(table, "|{}", "---|".repeat(headers.len()));

        for row in &rendered.rows {
            let _ = writeln!(table, "| {} |", row.cells().join(" | "));
        }

        Ok(table)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx)?)
    }
}
