use crate::api::ApiError;
use crate::model::form::Form;
use crate::model::payload::{Attachment, UpdateFormPayload};
use crate::state::{AsyncOp, RequestGeneration, RequestTicket};
use crate::views::{
    FORM_NOT_FOUND, INVALID_FORM_ID, NAME_REQUIRED, Navigation, UNEXPECTED_FORM, parse_form_id,
};

/// Two-step delete: the modal opens first, the request only goes out on the
/// explicit confirm. A failed delete keeps the modal open.
#[derive(Debug, Default)]
struct DeleteConfirmation {
    open: bool,
    request: AsyncOp<()>,
}

/// Edit page: the loaded form, the editable fields, the save lifecycle and
/// the delete confirmation sub-flow.
///
/// Loads and writes (save, delete) each carry a [`RequestTicket`]. A result
/// whose ticket is no longer current is dropped, so responses for a form
/// the page has moved away from never touch the new one.
#[derive(Debug)]
pub struct FormEditState {
    form_id: Option<i64>,
    loads: RequestGeneration,
    writes: RequestGeneration,
    form: AsyncOp<Form>,
    pub name: String,
    pub description: String,
    new_file: Option<Attachment>,
    file_in_flight: bool,
    file_input_resets: u32,
    save: AsyncOp<Form>,
    delete: DeleteConfirmation,
}

impl FormEditState {
    pub fn new(raw_form_id: &str) -> Self {
        Self {
            form_id: parse_form_id(raw_form_id),
            loads: RequestGeneration::default(),
            writes: RequestGeneration::default(),
            form: AsyncOp::idle(),
            name: String::new(),
            description: String::new(),
            new_file: None,
            file_in_flight: false,
            file_input_resets: 0,
            save: AsyncOp::idle(),
            delete: DeleteConfirmation::default(),
        }
    }

    /// Points the page at another form. Fields and feedback start over and
    /// every request still in flight goes stale.
    pub fn retarget(&mut self, raw_form_id: &str) {
        let mut loads = std::mem::take(&mut self.loads);
        let mut writes = std::mem::take(&mut self.writes);
        loads.invalidate();
        writes.invalidate();
        *self = Self {
            loads,
            writes,
            ..Self::new(raw_form_id)
        };
    }

    pub fn form_id(&self) -> Option<i64> {
        self.form_id
    }

    /// Starts (or retries) loading. `None` means no request must be sent.
    pub fn begin_load(&mut self) -> Option<RequestTicket> {
        match self.form_id {
            Some(form_id) => {
                self.form.start();
                Some(self.loads.issue(form_id))
            }
            None => {
                self.loads.invalidate();
                self.form.fail(INVALID_FORM_ID);
                None
            }
        }
    }

    /// Applies a load result. Returns `false` when it was stale and dropped.
    pub fn finish_load(&mut self, ticket: RequestTicket, result: Result<Form, ApiError>) -> bool {
        if !self.loads.is_current(&ticket) {
            return false;
        }
        match result {
            Ok(form) if form.id != ticket.form_id() => self.form.fail(UNEXPECTED_FORM),
            Ok(form) => {
                self.fill_fields(&form);
                self.form.succeed(form);
            }
            Err(err) if err.is_not_found() => self.form.fail(FORM_NOT_FOUND),
            Err(err) => self.form.fail(err.to_string()),
        }
        true
    }

    fn fill_fields(&mut self, form: &Form) {
        self.name = form.name.clone();
        self.description = form.description.clone();
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_idle() || self.form.is_loading()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.form.error()
    }

    /// The form as last loaded or saved.
    pub fn form(&self) -> Option<&Form> {
        self.form.value().filter(|_| self.form.is_success())
    }

    pub fn current_file_label(&self) -> String {
        match self.form().and_then(Form::xls_file_name) {
            Some(file_name) => format!("Current file: {}", file_name),
            None => "No file uploaded".to_string(),
        }
    }

    pub fn select_file(&mut self, file: Option<Attachment>) {
        self.new_file = file;
    }

    pub fn selected_file_name(&self) -> Option<&str> {
        self.new_file.as_ref().map(|file| file.file_name.as_str())
    }

    /// Bumped every time the file input must be cleared.
    pub fn file_input_resets(&self) -> u32 {
        self.file_input_resets
    }

    /// Validates and moves the save to `loading`. A selected file makes the
    /// request multipart; without one it is a JSON patch of the current
    /// name and description. The ticket carries the target form id.
    pub fn submit(&mut self) -> Option<(RequestTicket, UpdateFormPayload)> {
        let form_id = self.form().map(|form| form.id)?;
        if self.save.is_loading() || self.delete.request.is_loading() {
            return None;
        }

        let name = self.name.trim();
        if name.is_empty() {
            self.save.fail(NAME_REQUIRED);
            return None;
        }

        let payload = UpdateFormPayload {
            name: Some(name.to_string()),
            description: Some(self.description.trim().to_string()),
            xls_file: self.new_file.clone(),
        };
        self.file_in_flight = payload.xls_file.is_some();
        self.save.start();
        Some((self.writes.issue(form_id), payload))
    }

    /// Applies a save result. Returns `false` when it was stale and dropped.
    pub fn finish_save(&mut self, ticket: RequestTicket, result: Result<Form, ApiError>) -> bool {
        if !self.writes.is_current(&ticket) {
            return false;
        }
        match result {
            Ok(updated) if updated.id != ticket.form_id() => self.save.fail(UNEXPECTED_FORM),
            Ok(updated) => {
                self.fill_fields(&updated);
                if self.file_in_flight {
                    self.new_file = None;
                    self.file_input_resets += 1;
                }
                self.form.succeed(updated.clone());
                self.save.succeed(updated);
            }
            Err(err) => self.save.fail(err.to_string()),
        }
        self.file_in_flight = false;
        true
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_loading()
    }

    pub fn save_label(&self) -> &'static str {
        if self.is_saving() {
            "Saving…"
        } else {
            "Save changes"
        }
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save.error()
    }

    pub fn save_message(&self) -> Option<String> {
        if !self.save.is_success() {
            return None;
        }
        self.save
            .value()
            .map(|form| format!("Successfully updated form \"{}\"", form.name))
    }

    pub fn request_delete(&mut self) {
        if self.form().is_some() {
            self.delete.open = true;
            self.delete.request.reset();
        }
    }

    /// Closing is refused while the delete request is in flight.
    pub fn cancel_delete(&mut self) {
        if !self.delete.request.is_loading() {
            self.delete.open = false;
            self.delete.request.reset();
        }
    }

    pub fn confirm_delete(&mut self) -> Option<RequestTicket> {
        if !self.delete.open || self.delete.request.is_loading() || self.save.is_loading() {
            return None;
        }
        let form_id = self.form().map(|form| form.id)?;
        self.delete.request.start();
        Some(self.writes.issue(form_id))
    }

    /// A stale result is dropped and never navigates.
    pub fn finish_delete(
        &mut self,
        ticket: RequestTicket,
        result: Result<(), ApiError>,
    ) -> Option<Navigation> {
        if !self.writes.is_current(&ticket) {
            return None;
        }
        match result {
            Ok(()) => {
                self.delete.request.succeed(());
                self.delete.open = false;
                Some(Navigation::FormList)
            }
            Err(err) => {
                self.delete.request.fail(err.to_string());
                None
            }
        }
    }

    pub fn is_delete_open(&self) -> bool {
        self.delete.open
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.request.is_loading()
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete.request.error()
    }

    pub fn delete_label(&self) -> &'static str {
        if self.is_deleting() { "Deleting…" } else { "Delete" }
    }

    pub fn delete_prompt(&self) -> Option<String> {
        self.form().map(|form| {
            format!(
                "Are you sure you want to delete the form \"{}\"? This action cannot be undone.",
                form.name
            )
        })
    }
}
