use common::api::ApiError;
use common::model::form::Form;
use common::model::submission::FormSubmission;
use common::state::RequestTicket;

use super::web_forms::WidgetSubmission;

pub enum Msg {
    Load,
    Loaded(RequestTicket, Result<Form, ApiError>),
    WidgetUnavailable(String),
    WidgetSubmitted(WidgetSubmission),
    XmlUnreadable(RequestTicket, String),
    Submitted(RequestTicket, Result<FormSubmission, ApiError>),
}
