//! Platform-neutral core of the XLSForm manager: the forms data model, the
//! REST client (request building, transport seam, response normalization)
//! and the request-lifecycle state machines behind each page.

pub mod api;
pub mod model;
pub mod state;
pub mod views;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::form::Form;

    pub fn sample_form() -> Form {
        Form {
            id: 1,
            name: "Patient Survey".to_string(),
            description: "Survey for patient feedback".to_string(),
            xls_form: Some("/media/xlsforms/patient-survey.xlsx".to_string()),
            version: "1.0".to_string(),
            xml_definition: "<form></form>".to_string(),
            created_at: "2025-10-01T10:00:00Z".to_string(),
            updated_at: "2025-10-02T15:30:00Z".to_string(),
            submissions: None,
        }
    }

    pub fn sample_form_json() -> String {
        serde_json::json!({
            "id": 1,
            "name": "Patient Survey",
            "description": "Survey for patient feedback",
            "xls_form": "/media/xlsforms/patient-survey.xlsx",
            "version": "1.0",
            "xml_definition": "<form></form>",
            "created_at": "2025-10-01T10:00:00Z",
            "updated_at": "2025-10-02T15:30:00Z"
        })
        .to_string()
    }
}
