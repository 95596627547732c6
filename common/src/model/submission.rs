use serde::{Deserialize, Serialize};

/// One XML instance recorded against a form. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub submission_id: i64,
    pub form_id: i64,
    pub submitted_at: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub xml_submission: String,
}
