//! Submit page: loads a form definition for the rendering widget and relays
//! the widget's submissions to the API.
//!
//! The page reloads whenever its id changes. Loads and submissions are
//! tagged with a [`RequestTicket`] and a result is applied only if its ticket
//! is still the latest one, so the last request *started* always wins and a
//! submission sent for a previous form never reports on the current one.

use thiserror::Error;

use crate::api::ApiError;
use crate::model::form::Form;
use crate::model::submission::FormSubmission;
use crate::state::{AsyncOp, RequestTicket, RequestGeneration};
use crate::views::{INVALID_FORM_ID, UNEXPECTED_FORM, parse_form_id};

/// Key under which the widget puts the serialized instance.
pub const XML_SUBMISSION_FILE: &str = "xml_submission_file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStatus {
    Pending,
    Ready,
}

impl PayloadStatus {
    /// Anything the widget reports other than `ready` is treated as pending.
    pub fn from_widget(status: &str) -> Self {
        if status == "ready" {
            PayloadStatus::Ready
        } else {
            PayloadStatus::Pending
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue<F> {
    Text(String),
    File(F),
}

/// The widget's submit event payload, with `F` standing for whatever file
/// handle the host platform uses.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload<F> {
    pub status: PayloadStatus,
    /// Each element is one form-data collection; only the first is read.
    pub data: Vec<Vec<(String, EntryValue<F>)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("Submission payload is not ready")]
    NotReady,
    #[error("Submission payload missing XML file")]
    MissingXmlFile,
}

impl<F> SubmissionPayload<F> {
    pub fn xml_submission_file(&self) -> Result<&F, SubmitRejection> {
        if self.status != PayloadStatus::Ready {
            return Err(SubmitRejection::NotReady);
        }
        self.data
            .first()
            .and_then(|entries| {
                entries.iter().find_map(|(key, value)| match value {
                    EntryValue::File(file) if key == XML_SUBMISSION_FILE => Some(file),
                    _ => None,
                })
            })
            .ok_or(SubmitRejection::MissingXmlFile)
    }
}

/// What the page must tell the widget once a submission has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Invoke the continuation asking for a fresh instance.
    RequestNewInstance,
    /// Leave the widget alone so the user can fix or resend.
    Stay,
}

#[derive(Debug, Default)]
pub struct FormSubmitState {
    form_id: Option<i64>,
    loads: RequestGeneration,
    submissions: RequestGeneration,
    form: AsyncOp<Form>,
    submission: AsyncOp<FormSubmission>,
    last_submission_id: Option<i64>,
}

impl FormSubmitState {
    /// Starts loading the form behind `raw_form_id`, superseding any load
    /// still in flight. Returns the ticket to send, or `None` when the id is
    /// invalid and nothing must be requested.
    pub fn load(&mut self, raw_form_id: &str) -> Option<RequestTicket> {
        self.submission.reset();
        self.submissions.invalidate();
        self.last_submission_id = None;
        self.form_id = parse_form_id(raw_form_id);

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

    /// Applies a load result. Returns `false` when the result belonged to a
    /// superseded load and was dropped.
    pub fn finish_load(&mut self, ticket: RequestTicket, result: Result<Form, ApiError>) -> bool {
        if !self.loads.is_current(&ticket) {
            return false;
        }
        match result {
            Ok(form) if form.id != ticket.form_id() => self.form.fail(UNEXPECTED_FORM),
            result => self.form.settle(result),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_idle() || self.form.is_loading()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.form.error()
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.value().filter(|_| self.form.is_success())
    }

    pub fn title(&self) -> Option<String> {
        self.form().map(|form| format!("Submit data for {}", form.name))
    }

    /// Checks the widget payload. A rejection is shown to the user at once.
    pub fn accept_payload<'p, F>(
        &mut self,
        payload: &'p SubmissionPayload<F>,
    ) -> Result<&'p F, SubmitRejection> {
        payload.xml_submission_file().inspect_err(|rejection| {
            self.submission.fail(rejection.to_string());
        })
    }

    /// Moves to the busy state. The returned ticket names the form to
    /// submit against and must come back with the result.
    pub fn begin_submit(&mut self) -> Option<RequestTicket> {
        if self.submission.is_loading() {
            return None;
        }
        let form_id = self.form().map(|form| form.id)?;
        self.submission.start();
        Some(self.submissions.issue(form_id))
    }

    /// For failures that happen on the client before the request is sent,
    /// such as an unreadable XML file. Returns `false` when stale.
    pub fn fail_submit(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.submissions.is_current(&ticket) {
            return false;
        }
        self.submission.fail(message);
        true
    }

    /// A stale result is dropped and always leaves the widget alone.
    pub fn finish_submit(
        &mut self,
        ticket: RequestTicket,
        result: Result<FormSubmission, ApiError>,
    ) -> SubmitOutcome {
        if !self.submissions.is_current(&ticket) {
            return SubmitOutcome::Stay;
        }
        match result {
            Ok(submission) => {
                self.last_submission_id = Some(submission.submission_id);
                self.submission.succeed(submission);
                SubmitOutcome::RequestNewInstance
            }
            Err(err) => {
                self.submission.fail(err.to_string());
                SubmitOutcome::Stay
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn busy_message(&self) -> Option<&'static str> {
        self.is_submitting().then_some("Sending submission…")
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn success_message(&self) -> Option<String> {
        if !self.submission.is_success() {
            return None;
        }
        self.submission
            .value()
            .map(|submission| format!("Submission stored with ID {}", submission.submission_id))
    }

    pub fn last_submission_label(&self) -> Option<String> {
        self.last_submission_id
            .map(|id| format!("Last submission ID: {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_form;
    use pretty_assertions::assert_eq;

    fn ready_with(entries: Vec<(String, EntryValue<String>)>) -> SubmissionPayload<String> {
        SubmissionPayload {
            status: PayloadStatus::Ready,
            data: vec![entries],
        }
    }

    fn xml_entry(xml: &str) -> (String, EntryValue<String>) {
        (XML_SUBMISSION_FILE.to_string(), EntryValue::File(xml.to_string()))
    }

    fn loaded() -> FormSubmitState {
        let mut state = FormSubmitState::default();
        let ticket = state.load("1").unwrap();
        assert!(state.finish_load(ticket, Ok(sample_form())));
        state
    }

    fn form_two() -> Form {
        Form {
            id: 2,
            name: "Two".to_string(),
            ..sample_form()
        }
    }

    fn submission(id: i64) -> FormSubmission {
        FormSubmission {
            submission_id: id,
            form_id: 1,
            submitted_at: "2025-10-01T12:00:00Z".to_string(),
            username: None,
            xml_submission: String::new(),
        }
    }

    #[test]
    fn widget_status_parsing() {
        assert_eq!(PayloadStatus::from_widget("ready"), PayloadStatus::Ready);
        assert_eq!(PayloadStatus::from_widget("pending"), PayloadStatus::Pending);
    }

    #[test]
    fn pending_payload_is_rejected() {
        let mut state = loaded();
        let payload = SubmissionPayload {
            status: PayloadStatus::Pending,
            data: vec![vec![xml_entry("<data/>")]],
        };
        assert_eq!(state.accept_payload(&payload), Err(SubmitRejection::NotReady));
        assert_eq!(state.submit_error(), Some("Submission payload is not ready"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn payload_without_xml_file_is_rejected() {
        let mut state = loaded();
        let text_only = ready_with(vec![(
            XML_SUBMISSION_FILE.to_string(),
            EntryValue::Text("<data/>".to_string()),
        )]);
        assert_eq!(
            state.accept_payload(&text_only),
            Err(SubmitRejection::MissingXmlFile)
        );

        let empty: SubmissionPayload<String> = SubmissionPayload {
            status: PayloadStatus::Ready,
            data: Vec::new(),
        };
        assert_eq!(state.accept_payload(&empty), Err(SubmitRejection::MissingXmlFile));
        assert_eq!(state.submit_error(), Some("Submission payload missing XML file"));
    }

    #[test]
    fn xml_file_is_found_among_other_entries() {
        let mut state = loaded();
        let payload = ready_with(vec![
            ("other_field".to_string(), EntryValue::Text("value".to_string())),
            xml_entry("<data><field>value</field></data>"),
        ]);
        assert_eq!(
            state.accept_payload(&payload).map(String::as_str),
            Ok("<data><field>value</field></data>")
        );
    }

    #[test]
    fn invalid_id_is_rejected_without_ticket() {
        let mut state = FormSubmitState::default();
        assert_eq!(state.load("invalid"), None);
        assert_eq!(state.load_error(), Some(INVALID_FORM_ID));
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut state = FormSubmitState::default();
        let first = state.load("1").unwrap();
        let second = state.load("2").unwrap();

        let other = Form {
            id: 2,
            name: "Other Form".to_string(),
            ..sample_form()
        };
        assert!(state.finish_load(second, Ok(other)));
        assert!(!state.finish_load(first, Ok(sample_form())));
        assert_eq!(state.title().as_deref(), Some("Submit data for Other Form"));
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_form() {
        let mut state = FormSubmitState::default();
        let first = state.load("1").unwrap();
        let second = state.load("2").unwrap();
        assert!(!state.finish_load(first, Err(ApiError::Network("boom".to_string()))));
        assert!(state.is_loading());
        assert!(state.finish_load(second, Ok(form_two())));
        assert_eq!(state.load_error(), None);
    }

    #[test]
    fn successful_submission_requests_new_instance() {
        let mut state = loaded();
        let ticket = state.begin_submit().unwrap();
        assert_eq!(ticket.form_id(), 1);
        assert_eq!(state.busy_message(), Some("Sending submission…"));
        assert_eq!(state.begin_submit(), None);

        let outcome = state.finish_submit(ticket, Ok(submission(123)));
        assert_eq!(outcome, SubmitOutcome::RequestNewInstance);
        assert_eq!(state.success_message().as_deref(), Some("Submission stored with ID 123"));
        assert_eq!(state.last_submission_label().as_deref(), Some("Last submission ID: 123"));
        assert_eq!(state.busy_message(), None);
    }

    #[test]
    fn failed_submission_stays_and_keeps_last_id() {
        let mut state = loaded();
        let first = state.begin_submit().unwrap();
        state.finish_submit(first, Ok(submission(7)));

        let second = state.begin_submit().unwrap();
        let outcome =
            state.finish_submit(second, Err(ApiError::Network("Submission failed".to_string())));
        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(state.submit_error(), Some("Submission failed"));
        assert_eq!(state.success_message(), None);
        assert_eq!(state.last_submission_label().as_deref(), Some("Last submission ID: 7"));
    }

    #[test]
    fn changing_form_clears_submission_feedback() {
        let mut state = loaded();
        let ticket = state.begin_submit().unwrap();
        state.finish_submit(ticket, Ok(submission(7)));
        state.load("2");
        assert_eq!(state.last_submission_label(), None);
        assert_eq!(state.success_message(), None);
    }

    #[test]
    fn submission_for_previous_form_is_dropped() {
        let mut state = loaded();
        let stale = state.begin_submit().unwrap();

        let ticket = state.load("2").unwrap();
        state.finish_load(ticket, Ok(form_two()));
        let current = state.begin_submit().unwrap();

        let outcome = state.finish_submit(stale, Ok(submission(7)));
        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(state.title().as_deref(), Some("Submit data for Two"));
        assert_eq!(state.success_message(), None);
        assert_eq!(state.last_submission_label(), None);
        assert!(state.is_submitting());

        assert!(!state.fail_submit(stale, "unreadable"));
        assert!(state.is_submitting());

        let outcome = state.finish_submit(current, Ok(submission(8)));
        assert_eq!(outcome, SubmitOutcome::RequestNewInstance);
        assert_eq!(state.success_message().as_deref(), Some("Submission stored with ID 8"));
    }

    #[test]
    fn form_for_another_id_is_rejected() {
        let mut state = FormSubmitState::default();
        let ticket = state.load("2").unwrap();
        assert!(state.finish_load(ticket, Ok(sample_form())));
        assert_eq!(state.form(), None);
        assert_eq!(state.load_error(), Some(UNEXPECTED_FORM));
    }
}
