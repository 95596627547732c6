//! Transport-independent description of an HTTP request.
//!
//! The forms client never talks to the network directly: it builds an
//! [`ApiRequest`] and hands it to a [`Transport`](crate::api::client::Transport).
//! The body is a tagged union so the JSON-vs-multipart decision made by
//! `api::forms::update` is visible to callers and tests without a browser.

use serde_json::Value;

use crate::model::payload::Attachment;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One `multipart/form-data` part.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text { name: String, value: String },
    File { name: String, attachment: Attachment },
}

impl MultipartField {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        MultipartField::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn file(name: &str, attachment: Attachment) -> Self {
        MultipartField::File {
            name: name.to_string(),
            attachment,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// The transport picks the boundary, so no content type is fixed here.
    Multipart(Vec<MultipartField>),
    Xml(String),
}

impl RequestBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty | RequestBody::Multipart(_) => None,
            RequestBody::Json(_) => Some(JSON_CONTENT_TYPE),
            RequestBody::Xml(_) => Some(XML_CONTENT_TYPE),
        }
    }

    /// Part names of a multipart body, in order. Empty for other variants.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            RequestBody::Multipart(fields) => fields.iter().map(MultipartField::name).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }
}

/// What came back over the wire, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
