use crate::api::ApiError;
use crate::model::form::Form;
use crate::model::payload::{Attachment, CreateFormPayload};
use crate::state::AsyncOp;
use crate::views::{FILE_REQUIRED, NAME_REQUIRED, Navigation, REDIRECT_DELAY};

/// Create page: field values plus the lifecycle of the single POST.
///
/// Validation failures land in the same error slot as server failures but
/// never produce a request.
#[derive(Debug, Default)]
pub struct FormCreateState {
    pub name: String,
    pub description: String,
    file: Option<Attachment>,
    submission: AsyncOp<Form>,
}

impl FormCreateState {
    pub fn select_file(&mut self, file: Option<Attachment>) {
        self.file = file;
    }

    pub fn selected_file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.file_name.as_str())
    }

    /// Validates the fields and moves to `loading`. Returns the payload to
    /// send, or `None` when nothing must be sent. Once the form exists the
    /// page is only waiting to leave, so nothing is sent again.
    pub fn submit(&mut self) -> Option<CreateFormPayload> {
        if self.submission.is_loading() || self.submission.is_success() {
            return None;
        }

        let name = self.name.trim();
        if name.is_empty() {
            self.submission.fail(NAME_REQUIRED);
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.submission.fail(FILE_REQUIRED);
            return None;
        };

        let description = self.description.trim();
        let payload = CreateFormPayload {
            name: name.to_string(),
            xls_file: file,
            description: (!description.is_empty()).then(|| description.to_string()),
        };
        self.submission.start();
        Some(payload)
    }

    /// On success the page shows the confirmation, then leaves after
    /// [`REDIRECT_DELAY`].
    pub fn finish(&mut self, result: Result<Form, ApiError>) -> Option<Navigation> {
        let created = result.is_ok();
        self.submission.settle(result);
        created.then_some(Navigation::FormListAfter(REDIRECT_DELAY))
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_loading()
    }

    /// True from the moment the request goes out until the page leaves.
    pub fn is_locked(&self) -> bool {
        self.submission.is_loading() || self.submission.is_success()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Creating…"
        } else {
            "Create form"
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn success_message(&self) -> Option<String> {
        if !self.submission.is_success() {
            return None;
        }
        self.submission
            .value()
            .map(|form| format!("Successfully created form \"{}\"", form.name))
    }
}
