//! Request payloads for the write operations of the forms API.
//!
//! These carry user intent only. How a payload is encoded on the wire
//! (multipart or JSON) is decided in `api::forms`.

/// A file picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        self.content_type = (!content_type.is_empty()).then_some(content_type);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFormPayload {
    pub name: String,
    pub xls_file: Attachment,
    pub description: Option<String>,
}

/// Partial update. `None` leaves the field unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateFormPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub xls_file: Option<Attachment>,
}
