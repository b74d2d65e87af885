//! JSON data loading
//!
//! The host application serves grade history and section listings as JSON
//! arrays; the CLI reads the same shapes from files.

use crate::core::models::{GradeRecord, Section};
use std::fs;
use std::path::Path;

/// Parse a grade-history JSON array.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or carries unknown grade labels.
pub fn parse_grade_history(json: &str) -> Result<Vec<GradeRecord>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid grade history JSON: {e}"))
}

/// Parse a sections JSON array.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
pub fn parse_sections(json: &str) -> Result<Vec<Section>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid sections JSON: {e}"))
}

/// Load a grade-history JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_grade_history(path: &Path) -> Result<Vec<GradeRecord>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_grade_history(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Load a sections JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_sections(path: &Path) -> Result<Vec<Section>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_sections(&content).map_err(|e| format!("{}: {e}", path.display()))
}
