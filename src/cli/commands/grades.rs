//! Grades command handler
//!
//! Loads a grade-history JSON file, aggregates it into per-offering groups,
//! and prints ASCII bar charts to stdout.

use course_lens::core::grades::aggregate_grade_history;
use course_lens::core::loader::load_grade_history;
use course_lens::core::report::TextRenderer;
use logger::{error, info};
use std::path::Path;

/// Run the grades command.
pub fn run(input_file: &Path) {
    if let Err(err) = print_grade_charts(input_file) {
        error!("Grade chart failed for {}: {err}", input_file.display());
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

fn print_grade_charts(input_file: &Path) -> Result<(), String> {
    let records = load_grade_history(input_file)?;
    info!(
        "Loaded {} grade records from {}",
        records.len(),
        input_file.display()
    );

    let groups = aggregate_grade_history(&records)?;
    print!("{}", TextRenderer::grade_chart(&groups));

    Ok(())
}
