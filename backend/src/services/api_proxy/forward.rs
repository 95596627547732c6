use std::time::Duration;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};

use super::error::GatewayError;

/// Request headers relayed to the REST backend. Multipart boundaries live in
/// `Content-Type`, so it must pass through untouched.
const FORWARDED_HEADERS: [&str; 2] = ["content-type", "accept"];

/// The REST backend every `/api/*` call is relayed to.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

pub async fn process(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> Result<HttpResponse, GatewayError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|value| value.as_str())
        .unwrap_or_else(|| req.path());
    let url = upstream.url_for(path_and_query);
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| GatewayError::UnsupportedMethod(req.method().to_string()))?;

    let mut outgoing = upstream.client.request(method, &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = req.headers().get(name) {
            outgoing = outgoing.header(name, value.as_bytes());
        }
    }

    debug!("{} {} -> {}", req.method(), path_and_query, url);
    let response = outgoing.body(body).send().await.map_err(|err| {
        warn!("{} {} failed: {}", req.method(), url, err);
        GatewayError::Unavailable(err)
    })?;

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = response.bytes().await?;

    let mut relayed = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        relayed.insert_header((CONTENT_TYPE, content_type));
    }
    Ok(relayed.body(bytes))
}
