//! Plain-text rendering for the terminal
//!
//! Used by the CLI to print grade-distribution charts and the sections table
//! directly to stdout.

use crate::core::grades::GradeGroup;
use crate::core::sections::RenderedTable;
use std::fmt::Write;

/// Width of a full (100%) chart bar in characters
const BAR_WIDTH: usize = 40;

/// Plain-text chart and table renderer
pub struct TextRenderer;

impl TextRenderer {
    /// Render grade-distribution groups as ASCII bar charts, one block per
    /// group, most recent quarter first.
    #[must_use]
    pub fn grade_chart(groups: &[GradeGroup]) -> String {
        if groups.is_empty() {
            return "No grade history available.\n".to_string();
        }

        let mut output = String::new();

        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }

            let _ = writeln!(output, "{}", group.title);
            let _ = writeln!(output, "{}", "=".repeat(group.title.chars().count()));

            for bar in &group.bars {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let filled = ((bar.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
                let _ = writeln!(
                    output,
                    "{:>2}  {:<width$} {:>6.2}% ({})",
                    bar.grade.label(),
                    "#".repeat(filled),
                    bar.percentage,
                    bar.count,
                    width = BAR_WIDTH
                );
            }
        }

        output
    }

    /// Render the sections table with space-aligned columns.
    #[must_use]
    pub fn sections_table(table: &RenderedTable) -> String {
        let headers = RenderedTable::headers();

        // Column widths: widest of header and cells
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &table.rows {
            for (i, cell) in row.cells().iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut output = String::new();

        let header_line: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(header, &width)| format!("{header:<width$}"))
            .collect();
        let _ = writeln!(output, "{}", header_line.join("  ").trim_end());

        let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        let _ = writeln!(output, "{}", separator.join("  "));

        for row in &table.rows {
            let cells: Vec<String> = row
                .cells()
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect();
            let _ = writeln!(output, "{}", cells.join("  ").trim_end());
        }

        output
    }
}
