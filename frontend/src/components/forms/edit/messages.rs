use common::api::ApiError;
use common::model::form::Form;
use common::model::payload::Attachment;
use common::state::RequestTicket;
use web_sys::File;

pub enum Msg {
    Load,
    Loaded(RequestTicket, Result<Form, ApiError>),
    SetName(String),
    SetDescription(String),
    FileChosen(Option<File>),
    FileRead(Result<Attachment, String>),
    Save,
    Saved(RequestTicket, Result<Form, ApiError>),
    OpenDelete,
    CancelDelete,
    ConfirmDelete,
    Deleted(RequestTicket, Result<(), ApiError>),
    Back,
}
