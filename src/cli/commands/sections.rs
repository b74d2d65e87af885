//! Sections command handler
//!
//! Loads a sections JSON file and prints the rendered table to stdout.

use course_lens::core::loader::load_sections;
use course_lens::core::report::TextRenderer;
use course_lens::core::sections::SectionsTable;
use logger::{error, info};
use std::path::Path;

/// Run the sections command.
pub fn run(input_file: &Path) {
    if let Err(err) = print_sections_table(input_file) {
        error!("Sections table failed for {}: {err}", input_file.display());
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

fn print_sections_table(input_file: &Path) -> Result<(), String> {
    let sections = load_sections(input_file)?;
    info!(
        "Loaded {} sections from {}",
        sections.len(),
        input_file.display()
    );

    let table = SectionsTable::render(&sections)?;
    print!("{}", TextRenderer::sections_table(&table));

    Ok(())
}
