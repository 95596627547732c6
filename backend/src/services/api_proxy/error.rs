use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::api::ErrorBody;
use thiserror::Error;

/// Failures of the gateway itself. Upstream error statuses are not errors
/// here; they are relayed as-is.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Upstream API unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("Method {0} is not supported")]
    UnsupportedMethod(String),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Same `{"detail": ...}` shape as the REST backend, so the browser
    /// client shows the reason instead of a generic failure.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
