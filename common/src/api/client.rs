use crate::api::error::ApiError;
use crate::api::forms;
use crate::api::request::{ApiRequest, RawResponse};
use crate::api::response::{expect_body, handle_response};
use crate::model::form::Form;
use crate::model::payload::{CreateFormPayload, UpdateFormPayload};
use crate::model::submission::FormSubmission;

/// Executes an [`ApiRequest`] and returns the raw status and body.
///
/// Implementations only report failures to obtain a response at all
/// (`ApiError::Network`); status handling belongs to the client.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Typed operations on `/api/forms`, generic over how requests are sent.
#[derive(Debug, Clone, Default)]
pub struct FormsClient<T> {
    transport: T,
}

impl<T: Transport> FormsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Forms in whatever order the server returns them.
    pub async fn list_forms(&self) -> Result<Vec<Form>, ApiError> {
        let response = self.transport.send(forms::list()).await?;
        Ok(handle_response(&response)?.unwrap_or_default())
    }

    pub async fn get_form(&self, form_id: i64) -> Result<Form, ApiError> {
        let response = self.transport.send(forms::get(form_id)).await?;
        expect_body(&response)
    }

    pub async fn create_form(&self, payload: &CreateFormPayload) -> Result<Form, ApiError> {
        let response = self.transport.send(forms::create(payload)).await?;
        expect_body(&response)
    }

    pub async fn update_form(
        &self,
        form_id: i64,
        payload: &UpdateFormPayload,
    ) -> Result<Form, ApiError> {
        let response = self.transport.send(forms::update(form_id, payload)).await?;
        expect_body(&response)
    }

    pub async fn delete_form(&self, form_id: i64) -> Result<(), ApiError> {
        let response = self.transport.send(forms::delete(form_id)).await?;
        handle_response::<serde_json::Value>(&response)?;
        Ok(())
    }

    pub async fn submit_form(
        &self,
        form_id: i64,
        xml_payload: &str,
    ) -> Result<FormSubmission, ApiError> {
        let response = self.transport.send(forms::submit(form_id, xml_payload)).await?;
        expect_body(&response)
    }
}
