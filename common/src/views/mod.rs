//! Request-lifecycle state machines behind each page.
//!
//! These hold everything a page needs to decide what to render and which
//! request to send next, without touching the DOM or the network. The Yew
//! components in `frontend` own one of these each, feed it user events and
//! API results, and render from its accessors.

use std::time::Duration;

pub mod create;
pub mod edit;
pub mod list;
pub mod submit;

pub const NAME_REQUIRED: &str = "Please provide a name for the form";
pub const FILE_REQUIRED: &str = "Please select an XLSForm file";
pub const INVALID_FORM_ID: &str = "Invalid form identifier";
pub const FORM_NOT_FOUND: &str = "Form not found";
pub const UNEXPECTED_FORM: &str = "Server returned a different form than requested";

/// How long the create page shows its confirmation before leaving.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Where a page wants to go once an action has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    FormList,
    FormListAfter(Duration),
}

/// Route parameters arrive as text; anything but an integer is rejected.
pub fn parse_form_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
