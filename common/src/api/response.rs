//! Response normalization for every forms API call.
//!
//! Rules, in order:
//! - non-2xx: a JSON object with a non-empty string `detail` gives the
//!   message; a body that is not JSON at all gives its trimmed text; anything
//!   else falls back to `Request failed (<status>)`.
//! - 2xx with a blank body: absent value.
//! - 2xx with a body: JSON into the expected type, or the raw trimmed text as
//!   the error message when that fails.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::request::RawResponse;

pub fn handle_response<T: DeserializeOwned>(response: &RawResponse) -> Result<Option<T>, ApiError> {
    if !response.is_success() {
        let message = error_message(response.status, &response.body);
        debug!("request failed with status {}: {}", response.status, message);
        return Err(ApiError::Http {
            status: response.status,
            message,
        });
    }

    let text = response.body.trim();
    if text.is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<T>(text).map(Some).map_err(|err| {
        debug!("unexpected success body ({}): {}", err, text);
        ApiError::Malformed(text.to_string())
    })
}

/// Like [`handle_response`], for operations whose success must carry a body.
pub fn expect_body<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    handle_response(response)?.ok_or_else(|| ApiError::Malformed(EMPTY_RESPONSE.to_string()))
}

pub const EMPTY_RESPONSE: &str = "Empty response from server";

fn error_message(status: u16, body: &str) -> String {
    let generic = format!("Request failed ({})", status);
    match serde_json::from_str::<Value>(body) {
        Ok(payload) => match payload.get("detail").and_then(Value::as_str) {
            Some(detail) if !detail.is_empty() => detail.to_string(),
            _ => generic,
        },
        Err(_) => {
            let text = body.trim();
            if text.is_empty() {
                generic
            } else {
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::Form;
    use serde_json::json;

    fn failing(status: u16, body: &str) -> ApiError {
        handle_response::<Value>(&RawResponse::new(status, body)).unwrap_err()
    }

    #[test]
    fn empty_success_body_is_absent() {
        let result = handle_response::<Value>(&RawResponse::new(200, "")).unwrap();
        assert_eq!(result, None);

        let whitespace = handle_response::<Value>(&RawResponse::new(204, "  \n")).unwrap();
        assert_eq!(whitespace, None);
    }

    #[test]
    fn detail_field_becomes_the_message() {
        let err = failing(404, r#"{"detail": "Form not found"}"#);
        assert_eq!(err.to_string(), "Form not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn plain_text_error_body_is_trimmed() {
        let err = failing(400, "  Invalid XML \n");
        assert_eq!(err.message(), "Invalid XML");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn json_without_usable_detail_uses_generic_message() {
        assert_eq!(failing(400, r#"{"error": "nope"}"#).message(), "Request failed (400)");
        assert_eq!(failing(400, r#"{"detail": ""}"#).message(), "Request failed (400)");
        assert_eq!(failing(422, r#"{"detail": [1, 2]}"#).message(), "Request failed (422)");
    }

    #[test]
    fn empty_error_body_uses_generic_message() {
        assert_eq!(failing(500, "").message(), "Request failed (500)");
    }

    #[test]
    fn malformed_success_body_is_an_error_with_raw_text() {
        let err = handle_response::<Value>(&RawResponse::new(200, " <html>oops</html> ")).unwrap_err();
        assert_eq!(err, ApiError::Malformed("<html>oops</html>".to_string()));
    }

    #[test]
    fn success_body_of_wrong_shape_is_an_error() {
        let err = handle_response::<Form>(&RawResponse::new(200, r#"{"unexpected": true}"#)).unwrap_err();
        assert_eq!(err.message(), r#"{"unexpected": true}"#);
    }

    #[test]
    fn parses_success_body() {
        let body = json!({"submission_id": 5, "form_id": 1, "submitted_at": "2025-10-01T12:00:00Z"});
        let value = handle_response::<Value>(&RawResponse::new(201, body.to_string())).unwrap();
        assert_eq!(value, Some(body));
    }

    #[test]
    fn expect_body_rejects_blank_success() {
        let err = expect_body::<Value>(&RawResponse::new(200, "")).unwrap_err();
        assert_eq!(err.message(), EMPTY_RESPONSE);
    }
}
