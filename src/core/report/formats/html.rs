//! HTML report generator
//!
//! Generates grade-history reports in HTML format with CSS bar charts.
//! The generated HTML is self-contained with embedded styles.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::sections::{RenderedTable, SectionsTable};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator with CSS bar charts
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> Result<String, String> {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape_html(ctx.title));
        output = output.replace("{{group_count}}", &ctx.group_count().to_string());
        output = output.replace("{{section_count}}", &ctx.section_count().to_string());

        let grade_charts = Self::generate_chart_html(ctx);
        output = output.replace("{{grade_charts}}", &grade_charts);

        let sections_table = Self::generate_sections_html(ctx)?;
        output = output.replace("{{sections_table}}", &sections_table);

        Ok(output)
    }

    /// Generate one CSS bar chart per grade group
    fn generate_chart_html(ctx: &ReportContext) -> String {
        if !ctx.has_grades() {
            return "<p class=\"empty\">No grade history available.</p>\n".to_string();
        }

        let mut html = String::new();

        for group in ctx.grade_groups {
            let _ = writeln!(html, "<div class=\"chart-group\">");
            let _ = writeln!(html, "  <h3>{}</h3>", escape_html(&group.title));

            for bar in &group.bars {
                let _ = writeln!(html, "  <div class=\"bar-row\">");
                let _ = writeln!(html, "    <span class=\"bar-label\">{}</span>", bar.grade);
                let _ = writeln!(
                    html,
                    "    <div class=\"bar-track\"><div class=\"bar-fill\" style=\"width: {:.2}%\"></div></div>",
                    bar.percentage
                );
                let _ = writeln!(
                    html,
                    "    <span class=\"bar-value\">{:.2}% ({})</span>",
                    bar.percentage, bar.count
                );
                let _ = writeln!(html, "  </div>");
            }

            let _ = writeln!(html, "</div>");
        }

        html
    }

    /// Generate the sections table
    fn generate_sections_html(ctx: &ReportContext) -> Result<String, String> {
        if !ctx.has_sections() {
            return Ok("<p class=\"empty\">No sections available.</p>\n".to_string());
        }

        let rendered = SectionsTable::render(ctx.sections)?;

        let mut html = String::from("<table class=\"sections\">\n  <thead>\n    <tr>");
        for header in RenderedTable::headers() {
            let _ = write!(html, "<th>{header}</th>");
        }
        html.push_str("</tr>\n  </thead>\n  <tbody>\n");

        for row in &rendered.rows {
            html.push_str("    <tr>");
            for cell in row.cells() {
                let _ = write!(html, "<td>{}</td>", escape_html(cell));
            }
            html.push_str("</tr>\n");
        }

        html.push_str("  </tbody>\n</table>\n");
        Ok(html)
    }
}

/// Minimal HTML escaping for text content
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx)?)
    }
}
