//! Integration tests for the sections table and request builders

mod common;

use common::{five_sections, six_sections};
use course_lens::core::requests::{basic_search_request, delete_params, section_delete_request};
use course_lens::core::sections::{RenderedTable, SectionsTable, ENROLL_CODE_COLUMN};

#[test]
fn renders_without_rows_for_empty_input() {
    let table = SectionsTable::render(&[]).expect("render");
    assert!(table.is_empty());
    assert_eq!(RenderedTable::headers().len(), 10);
}

#[test]
fn has_the_expected_headers_and_column_ids() {
    let expected_headers = vec![
        "Quarter",
        "Course ID",
        "Title",
        "Status",
        "Enrolled",
        "Location",
        "Days",
        "Time",
        "Instructor",
        "Enroll Code",
    ];
    let expected_ids = vec![
        "quarter",
        "courseInfo.courseId",
        "courseInfo.title",
        "status",
        "enrolled",
        "location",
        "days",
        "time",
        "instructor",
        "section.enrollCode",
    ];

    assert_eq!(RenderedTable::headers(), expected_headers);
    assert_eq!(RenderedTable::column_ids(), expected_ids);
}

#[test]
fn has_the_expected_cell_values() {
    let table = SectionsTable::render(&six_sections()).expect("render");

    assert_eq!(table.cell(0, "quarter"), Some("S22"));
    assert_eq!(table.cell(0, "time"), Some("9:30 AM - 10:45 AM"));
    assert_eq!(table.cell(0, "days"), Some("T R"));
    assert_eq!(table.cell(0, "status"), Some("Closed"));
    assert_eq!(table.cell(0, "enrolled"), Some("51/77"));
    assert_eq!(table.cell(0, "location"), Some("PSYCH 1902"));
    assert_eq!(table.cell(0, "instructor"), Some("LOKSHTANOV D"));
    assert_eq!(table.cell(0, "courseInfo.title"), Some("DATA STRUCT ALGOR"));
    assert_eq!(table.cell(0, "section.enrollCode"), Some("08078"));

    assert_eq!(table.cell(5, "location"), Some("PHELP 1448"));
    assert_eq!(
        table.cell(5, "instructor"),
        Some("DANESHAMOOZ J, KILGORE J D, YANG YIFAN")
    );
}

#[test]
fn course_id_cell_drops_the_section_suffix() {
    let table = SectionsTable::render(&six_sections()).expect("render");

    assert_eq!(table.cell(0, "courseInfo.courseId"), Some("CMPSC 130A"));
    assert_ne!(table.cell(0, "courseInfo.courseId"), Some("CMPSC 130A -1"));
}

#[test]
fn identifies_each_type_of_status() {
    let table = SectionsTable::render(&five_sections()).expect("render");

    assert_eq!(table.cell(0, "status"), Some("Waitlist"));
    assert_eq!(table.cell(1, "status"), Some("Closed"));
    assert_eq!(table.cell(2, "status"), Some("Full"));
    assert_eq!(table.cell(3, "status"), Some("Cancelled"));
    assert_eq!(table.cell(4, "status"), Some("Open"));
}

#[test]
fn overenrolled_and_exact_fractions_format_verbatim() {
    let table = SectionsTable::render(&five_sections()).expect("render");

    assert_eq!(table.cell(1, "enrolled"), Some("84/80"));
    assert_eq!(table.cell(2, "enrolled"), Some("21/21"));
}

#[test]
fn delete_request_uses_the_row_enroll_code() {
    let table = SectionsTable::render(&six_sections()).expect("render");
    let request = section_delete_request(&table.rows[0], "42").expect("build");

    assert_eq!(request.method, "DELETE");
    assert_eq!(request.url, "/api/courses/user/psid");
    assert_eq!(request.params.enroll_cd, "08078");
    assert_eq!(request.params.ps_id, "42");
}

#[test]
fn delete_descriptor_serializes_for_the_network_client() {
    let json = serde_json::to_value(delete_params("07013", "42")).expect("serialize");

    assert_eq!(json["method"], "DELETE");
    assert_eq!(json["url"], "/api/courses/user/psid");
    assert_eq!(json["params"]["enrollCd"], "07013");
    assert_eq!(json["params"]["psId"], "42");
}

#[test]
fn rows_expose_the_enroll_code_by_column_id() {
    let table = SectionsTable::render(&five_sections()).expect("render");

    let codes: Vec<&str> = table
        .rows
        .iter()
        .map(|row| row.get(ENROLL_CODE_COLUMN).expect("enroll code cell"))
        .collect();
    assert_eq!(codes, vec!["07005", "07013", "07021", "07039", "07047"]);
}

#[test]
fn basic_search_descriptor_matches_the_public_api() {
    let request = basic_search_request("20204", "CMPSC", "L").expect("build");
    let json = serde_json::to_value(&request).expect("serialize");

    assert_eq!(json["method"], "GET");
    assert_eq!(json["url"], "/api/public/basicsearch");
    assert_eq!(json["params"]["qtr"], "20204");
    assert_eq!(json["params"]["dept"], "CMPSC");
    assert_eq!(json["params"]["level"], "L");
}
