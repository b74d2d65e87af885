//! Request descriptors for the host application API
//!
//! Pure construction only: each builder returns an HTTP-shaped descriptor for
//! an external network client to execute. Param field names serialize in the
//! host API's spelling.

use crate::core::models::Quarter;
use crate::core::sections::{RenderedRow, ENROLL_CODE_COLUMN};
use serde::Serialize;

/// An HTTP-shaped request descriptor: method, target path, and typed params.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRequest<P> {
    /// HTTP method
    pub method: &'static str,
    /// Target path on the host API
    pub url: &'static str,
    /// Query parameters
    pub params: P,
}

/// Query parameters of the section delete action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSectionParams {
    /// Enrollment code of the section to remove
    pub enroll_cd: String,
    /// Personal schedule identifier the section is removed from
    pub ps_id: String,
}

/// Query parameters of the public curriculum basic search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicSearchParams {
    /// Quarter code (yyyyq)
    pub qtr: String,
    /// Department code (e.g. "CMPSC")
    pub dept: String,
    /// Course level filter (e.g. "L" for lower division)
    pub level: String,
}

/// Build the delete descriptor from raw values.
#[must_use]
pub fn delete_params(enroll_cd: &str, ps_id: &str) -> ApiRequest<DeleteSectionParams> {
    ApiRequest {
        method: "DELETE",
        url: "/api/courses/user/psid",
        params: DeleteSectionParams {
            enroll_cd: enroll_cd.to_string(),
            ps_id: ps_id.to_string(),
        },
    }
}

/// Build the delete descriptor for a rendered table row, extracting the
/// enrollment code from the row's Enroll Code cell.
///
/// # Errors
///
/// Returns an error if the row has no enroll-code cell.
pub fn section_delete_request(
    row: &RenderedRow,
    ps_id: &str,
) -> Result<ApiRequest<DeleteSectionParams>, String> {
    let enroll_cd = row
        .get(ENROLL_CODE_COLUMN)
        .ok_or_else(|| format!("Row has no '{ENROLL_CODE_COLUMN}' cell"))?;

    Ok(delete_params(enroll_cd, ps_id))
}

/// Build the public basic-search descriptor.
///
/// # Errors
///
/// Returns an error if `qtr` is not a valid quarter code.
pub fn basic_search_request(
    qtr: &str,
    dept: &str,
    level: &str,
) -> Result<ApiRequest<BasicSearchParams>, String> {
    Quarter::parse(qtr)?;

    Ok(ApiRequest {
        method: "GET",
        url: "/api/public/basicsearch",
        params: BasicSearchParams {
            qtr: qtr.to_string(),
            dept: dept.to_string(),
            level: level.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseInfo, Section, SectionInfo, SectionStatus};
    use crate::core::sections::SectionsTable;

    fn rendered_row() -> RenderedRow {
        let section = Section {
            course_info: CourseInfo {
                quarter: "20222".to_string(),
                course_id: "CMPSC 130A -1".to_string(),
                title: "DATA STRUCT ALGOR".to_string(),
            },
            section: SectionInfo {
                enrolled_total: 51,
                max_enroll: 77,
                time_locations: Vec::new(),
                instructors: Vec::new(),
                enroll_code: "08078".to_string(),
                status: SectionStatus::Open,
            },
        };
        let table = SectionsTable::render(&[section]).expect("render");
        table.rows.into_iter().next().expect("one row")
    }

    #[test]
    fn delete_descriptor_has_expected_shape() {
        let request = delete_params("08078", "17");

        assert_eq!(request.method, "DELETE");
        assert_eq!(request.url, "/api/courses/user/psid");
        assert_eq!(request.params.enroll_cd, "08078");
        assert_eq!(request.params.ps_id, "17");
    }

    #[test]
    fn delete_request_pulls_enroll_code_from_row() {
        let request = section_delete_request(&rendered_row(), "17").expect("build");
        assert_eq!(request.params.enroll_cd, "08078");
        assert_eq!(request.params.ps_id, "17");
    }

    #[test]
    fn delete_descriptor_serializes_in_host_spelling() {
        let json = serde_json::to_value(delete_params("08078", "17")).expect("serialize");

        assert_eq!(json["method"], "DELETE");
        assert_eq!(json["url"], "/api/courses/user/psid");
        assert_eq!(json["params"]["enrollCd"], "08078");
        assert_eq!(json["params"]["psId"], "17");
    }

    #[test]
    fn basic_search_validates_quarter() {
        let request = basic_search_request("20204", "CMPSC", "L").expect("build");

        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "/api/public/basicsearch");
        assert_eq!(request.params.qtr, "20204");
        assert_eq!(request.params.dept, "CMPSC");
        assert_eq!(request.params.level, "L");

        assert!(basic_search_request("20209", "CMPSC", "L").is_err());
    }
}
