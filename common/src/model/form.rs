use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::model::submission::FormSubmission;

/// A survey definition as returned by the forms API.
///
/// The backend owns every field; the client only holds read-only snapshots
/// fetched per view. `xml_definition` is the compiled XForm handed to the
/// rendering widget, `xls_form` is the stored path of the uploaded XLSForm
/// source (null until a file has been attached).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub xls_form: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub xml_definition: String,
    pub created_at: String,
    pub updated_at: String,
    /// Most recent submissions, newest first. Only the detail endpoint sends
    /// this, and it caps the list at ten entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submissions: Option<Vec<FormSubmission>>,
}

impl Form {
    /// File name of the stored XLSForm (`/media/xlsforms/a.xlsx` -> `a.xlsx`).
    pub fn xls_file_name(&self) -> Option<&str> {
        self.xls_form
            .as_deref()
            .map(|path| path.rsplit('/').next().unwrap_or(path))
            .filter(|name| !name.is_empty())
    }

    pub fn description_text(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn version_text(&self) -> Option<&str> {
        non_empty(&self.version)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Renders an ISO-8601 timestamp as `Oct 2, 2025, 15:30`.
///
/// Values that do not parse as RFC 3339 are returned unchanged so the user
/// still sees whatever the server sent.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%b %-d, %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_form;

    #[test]
    fn xls_file_name_takes_last_segment() {
        let form = sample_form();
        assert_eq!(form.xls_file_name(), Some("patient-survey.xlsx"));

        let without_file = Form {
            xls_form: None,
            ..sample_form()
        };
        assert_eq!(without_file.xls_file_name(), None);
    }

    #[test]
    fn empty_description_and_version_are_absent() {
        let form = Form {
            description: String::new(),
            version: "  ".to_string(),
            ..sample_form()
        };
        assert_eq!(form.description_text(), None);
        assert_eq!(form.version_text(), None);
    }

    #[test]
    fn deserializes_list_entry_without_submissions() {
        let json = r#"{
            "id": 2,
            "name": "Health Assessment",
            "description": "",
            "xls_form": null,
            "version": "2.1",
            "xml_definition": "<form></form>",
            "created_at": "2025-09-15T08:00:00Z",
            "updated_at": "2025-10-01T09:00:00Z"
        }"#;
        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.id, 2);
        assert_eq!(form.xls_form, None);
        assert!(form.submissions.is_none());
    }

    #[test]
    fn formats_rfc3339_and_passes_through_garbage() {
        assert_eq!(format_timestamp("2025-10-02T15:30:00Z"), "Oct 2, 2025, 15:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
