//! Mermaid chart generator for grade distributions
//!
//! Generates Mermaid `xychart-beta` syntax that can be embedded in Markdown
//! files and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::grades::GradeGroup;
use std::fmt::Write;

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a bar chart for one grade-distribution group.
    ///
    /// The x-axis carries the 15 grade buckets in canonical order; bars show
    /// the percentage share of each bucket.
    #[must_use]
    pub fn generate_grade_chart(group: &GradeGroup) -> String {
        let mut output = String::from("```mermaid\nxychart-beta\n");

        let _ = writeln!(output, "    title \"{}\"", group.title);

        let labels: Vec<String> = group
            .bars
            .iter()
            .map(|bar| format!("\"{}\"", bar.grade))
            .collect();
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"Percent of grades\" 0 --> 100");

        let values: Vec<String> = group
            .bars
            .iter()
            .map(|bar| format!("{:.2}", bar.percentage))
            .collect();
        let _ = writeln!(output, "    bar [{}]", values.join(", "));

        output.push_str("```\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::aggregate_grade_history;
    use crate::core::models::{Grade, GradeRecord};

    #[test]
    fn chart_carries_title_axes_and_bars() {
        let groups =
            aggregate_grade_history(&[GradeRecord::new("20224", "Smith", Grade::A, 10)])
                .expect("aggregate");
        let chart = MermaidGenerator::generate_grade_chart(&groups[0]);

        assert!(chart.starts_with("```mermaid\nxychart-beta\n"));
        assert!(chart.contains("title \"Fall 2022 - Smith\""));
        assert!(chart.contains("x-axis [\"A+\", \"A\", \"A-\""));
        assert!(chart.contains("y-axis \"Percent of grades\" 0 --> 100"));
        assert!(chart.contains("bar [0.00, 100.00, 0.00"));
        assert!(chart.ends_with("```\n"));
    }
}
