//! Report command handler
//!
//! Generates grade-history/sections reports in Markdown or HTML.

use course_lens::config::Config;
use course_lens::core::{
    grades::{aggregate_grade_history, GradeGroup},
    loader::{load_grade_history, load_sections},
    models::Section,
    report::{HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator},
};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default report title when none is provided
const DEFAULT_TITLE: &str = "Course Report";

/// Run the report command.
///
/// # Arguments
/// * `grades_file` - Optional path to grade-history JSON
/// * `sections_file` - Optional path to sections JSON
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `title` - Optional report title
/// * `config` - Configuration containing the default reports directory
pub fn run(
    grades_file: Option<&Path>,
    sections_file: Option<&Path>,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) {
    if let Err(err) = generate_report(
        grades_file,
        sections_file,
        output_file,
        format_str,
        title,
        config,
    ) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Prepared report data ready for rendering
struct ReportData {
    grade_groups: Vec<GradeGroup>,
    sections: Vec<Section>,
}

/// Load and prepare all data needed for report generation
fn prepare_report_data(
    grades_file: Option<&Path>,
    sections_file: Option<&Path>,
) -> Result<ReportData, String> {
    if grades_file.is_none() && sections_file.is_none() {
        return Err("✗ Provide at least one of --grades or --sections".to_string());
    }

    let grade_groups = match grades_file {
        Some(path) => {
            let records = load_grade_history(path).map_err(|e| {
                error!("Failed to load grade history {}: {e}", path.display());
                format!("✗ Failed to load {}: {e}", path.display())
            })?;
            info!("Grade history loaded: {}", path.display());
            aggregate_grade_history(&records)
                .map_err(|e| format!("✗ Failed to aggregate {}: {e}", path.display()))?
        }
        None => Vec::new(),
    };

    let sections = match sections_file {
        Some(path) => {
            let sections = load_sections(path).map_err(|e| {
                error!("Failed to load sections {}: {e}", path.display());
                format!("✗ Failed to load {}: {e}", path.display())
            })?;
            info!("Sections loaded: {}", path.display());
            sections
        }
        None => Vec::new(),
    };

    Ok(ReportData {
        grade_groups,
        sections,
    })
}

/// Write the report to a file in the specified format
fn write_report(
    data: &ReportData,
    title: &str,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), String> {
    let ctx = ReportContext::new(title, &data.grade_groups, &data.sections);

    match format {
        ReportFormat::Markdown => {
            let reporter = MarkdownReporter::new();
            reporter
                .generate(&ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?;
        }
        ReportFormat::Html => {
            let reporter = HtmlReporter::new();
            reporter
                .generate(&ctx, output_path)
                .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?;
        }
    }

    Ok(())
}

/// Print a summary of the report
fn print_summary(data: &ReportData, title: &str) {
    println!("\n=== Summary ===");
    println!("Report: {title}");
    println!("Grade distribution groups: {}", data.grade_groups.len());
    println!("Sections: {}", data.sections.len());
}

fn generate_report(
    grades_file: Option<&Path>,
    sections_file: Option<&Path>,
    output_file: Option<&Path>,
    format_str: &str,
    title: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    // Prepare report data
    let data = prepare_report_data(grades_file, sections_file)?;
    let title = title.unwrap_or(DEFAULT_TITLE);

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let filename = grades_file
            .or(sections_file)
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .unwrap_or("course")
            .to_string();
        let output_filename = format!("{filename}_report.{}", format.extension());
        reports_dir.join(output_filename)
    };

    // Write the report
    write_report(&data, title, format, &final_output_path)?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    print_summary(&data, title);

    Ok(())
}
