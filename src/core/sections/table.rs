//! Declarative column configuration and rendering for the sections table
//!
//! Columns are explicit {display label, field id, formatter} triples; both the
//! column order and the field ids are an observable contract for consumers
//! that address cells by id (e.g. the delete-request builder).

use crate::core::models::Section;
use crate::core::sections::format;

/// Field id of the Enroll Code column, used to extract the enrollment code
/// from a rendered row.
pub const ENROLL_CODE_COLUMN: &str = "section.enrollCode";

/// One table column: display label, stable field id, and the cell formatter.
#[derive(Clone, Copy)]
pub struct Column {
    /// Column header shown in the table
    pub header: &'static str,
    /// Stable field id used to address cells
    pub id: &'static str,
    /// Formatter producing the cell text for a section row
    pub accessor: fn(&Section) -> Result<String, String>,
}

fn quarter_cell(row: &Section) -> Result<String, String> {
    format::format_quarter(&row.course_info.quarter)
}

fn course_id_cell(row: &Section) -> Result<String, String> {
    Ok(format::format_course_id(&row.course_info.course_id))
}

fn title_cell(row: &Section) -> Result<String, String> {
    Ok(row.course_info.title.clone())
}

fn status_cell(row: &Section) -> Result<String, String> {
    Ok(format::format_status(&row.section))
}

fn enrolled_cell(row: &Section) -> Result<String, String> {
    Ok(format::convert_to_fraction(
        row.section.enrolled_total,
        row.section.max_enroll,
    ))
}

fn location_cell(row: &Section) -> Result<String, String> {
    Ok(format::format_location(&row.section.time_locations))
}

fn days_cell(row: &Section) -> Result<String, String> {
    Ok(format::format_days(&row.section.time_locations))
}

fn time_cell(row: &Section) -> Result<String, String> {
    Ok(format::format_time(&row.section.time_locations))
}

fn instructor_cell(row: &Section) -> Result<String, String> {
    Ok(format::format_instructors(&row.section.instructors))
}

fn enroll_code_cell(row: &Section) -> Result<String, String> {
    Ok(row.section.enroll_code.clone())
}

/// The fixed sections-table column configuration, in display order.
pub const COLUMNS: [Column; 10] = [
    Column {
        header: "Quarter",
        id: "quarter",
        accessor: quarter_cell,
    },
    Column {
        header: "Course ID",
        id: "courseInfo.courseId",
        accessor: course_id_cell,
    },
    Column {
        header: "Title",
        id: "courseInfo.title",
        accessor: title_cell,
    },
    Column {
        header: "Status",
        id: "status",
        accessor: status_cell,
    },
    Column {
        header: "Enrolled",
        id: "enrolled",
        accessor: enrolled_cell,
    },
    Column {
        header: "Location",
        id: "location",
        accessor: location_cell,
    },
    Column {
        header: "Days",
        id: "days",
        accessor: days_cell,
    },
    Column {
        header: "Time",
        id: "time",
        accessor: time_cell,
    },
    Column {
        header: "Instructor",
        id: "instructor",
        accessor: instructor_cell,
    },
    Column {
        header: "Enroll Code",
        id: ENROLL_CODE_COLUMN,
        accessor: enroll_code_cell,
    },
];

/// One rendered table row: cell values keyed by column id, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    values: Vec<(&'static str, String)>,
}

impl RenderedRow {
    /// Get a cell value by column id.
    #[must_use]
    pub fn get(&self, column_id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(id, _)| *id == column_id)
            .map(|(_, value)| value.as_str())
    }

    /// Cell values in column order.
    #[must_use]
    pub fn cells(&self) -> Vec<&str> {
        self.values.iter().map(|(_, value)| value.as_str()).collect()
    }
}

/// A fully rendered sections table: header metadata plus rows in input order.
#[derive(Debug, Clone, Default)]
pub struct RenderedTable {
    /// Rendered rows, one per input section, preserving order
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    /// Column headers in display order.
    #[must_use]
    pub fn headers() -> Vec<&'static str> {
        COLUMNS.iter().map(|column| column.header).collect()
    }

    /// Column field ids in display order.
    #[must_use]
    pub fn column_ids() -> Vec<&'static str> {
        COLUMNS.iter().map(|column| column.id).collect()
    }

    /// Get a cell by row index and column id.
    #[must_use]
    pub fn cell(&self, row: usize, column_id: &str) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column_id))
    }

    /// Number of rendered rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The sections table renderer.
pub struct SectionsTable;

impl SectionsTable {
    /// Render sections through the column configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any cell formatter fails (malformed quarter code).
    pub fn render(sections: &[Section]) -> Result<RenderedTable, String> {
        let rows = sections
            .iter()
            .map(|section| {
                COLUMNS
                    .iter()
                    .map(|column| (column.accessor)(section).map(|value| (column.id, value)))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|values| RenderedRow { values })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RenderedTable { rows })
    }
}
