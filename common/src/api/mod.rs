//! Client side of the forms REST API.
//!
//! - `request`: transport-independent request/response shapes.
//! - `forms`: pure builders for each `/api/forms` operation.
//! - `response`: status/body normalization into values or [`ApiError`].
//! - `client`: the [`Transport`] seam and the typed [`FormsClient`].

pub mod client;
pub mod error;
pub mod forms;
pub mod request;
pub mod response;

pub use client::{FormsClient, Transport};
pub use error::{ApiError, ErrorBody};
pub use request::{ApiRequest, Method, MultipartField, RawResponse, RequestBody};
