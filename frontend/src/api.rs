//! Browser side of the API client: ships [`ApiRequest`]s through `fetch`
//! using gloo-net and hands the raw status and body back to `common`, which
//! owns every rule about what a response means.

use common::api::{
    ApiError, ApiRequest, FormsClient, Method, MultipartField, RawResponse, RequestBody, Transport,
};
use common::model::payload::Attachment;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

/// Client used by every page. Same-origin, so paths stay relative.
pub fn client() -> FormsClient<BrowserTransport> {
    FormsClient::new(BrowserTransport)
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = builder_for(request.method, &request.path);
        // Multipart has no fixed type; the browser adds the boundary itself.
        if let Some(content_type) = request.body.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let response = match request.body {
            RequestBody::Empty => builder.send().await,
            RequestBody::Json(value) => builder.body(value.to_string()).map_err(network)?.send().await,
            RequestBody::Xml(xml) => builder.body(xml).map_err(network)?.send().await,
            RequestBody::Multipart(fields) => {
                builder.body(form_data(&fields)?).map_err(network)?.send().await
            }
        }
        .map_err(network)?;

        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(RawResponse::new(status, body))
    }
}

fn builder_for(method: Method, path: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Patch => Request::patch(path),
        Method::Delete => Request::delete(path),
    }
}

fn form_data(fields: &[MultipartField]) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for field in fields {
        match field {
            MultipartField::Text { name, value } => {
                data.append_with_str(name, value).map_err(js_error)?;
            }
            MultipartField::File { name, attachment } => {
                let blob = attachment_blob(attachment)?;
                data.append_with_blob_and_filename(name, &blob, &attachment.file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(data)
}

fn attachment_blob(attachment: &Attachment) -> Result<Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(content_type) = &attachment.content_type {
        options.set_type(content_type);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
