use std::time::Duration;

use dine_core::gateways::FetchError;
use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    header::{ACCEPT, CONTENT_TYPE},
    StatusCode,
};
use serde_json::Value;

pub const DEFAULT_USER_AGENT: &str = concat!("dinefinder/", env!("CARGO_PKG_VERSION"));

const HTML_CONTENT_TYPE: &str = "text/html";

/// Number of body bytes that are logged for unexpected responses.
const LOGGED_BODY_PREFIX: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            system_proxy: true,
        }
    }
}

pub(crate) fn build_client(cfg: &HttpConfig) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        .timeout(cfg.timeout)
        .user_agent(cfg.user_agent.clone());
    if !cfg.system_proxy {
        builder = builder.no_proxy();
    }
    builder.build()
}

pub(crate) fn get_json(request: RequestBuilder) -> Result<Value, FetchError> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    into_json(response)
}

fn into_json(response: Response) -> Result<Value, FetchError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let body = response
        .text()
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    classify_response(status, content_type.as_deref(), &body)
}

/// Turn a raw HTTP response into a JSON document or a [`FetchError`].
///
/// Any non-2xx status is a [`FetchError::Status`], whatever the body.
/// A successful response that carries HTML is an error page.
pub(crate) fn classify_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<Value, FetchError> {
    if !status.is_success() {
        log::debug!(
            "Unsuccessful response ({status}): {}...",
            body_prefix(body, LOGGED_BODY_PREFIX)
        );
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }
    if content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains(HTML_CONTENT_TYPE)) {
        log::error!(
            "Received HTML instead of JSON: {}...",
            body_prefix(body, LOGGED_BODY_PREFIX)
        );
        return Err(FetchError::ErrorPage);
    }
    serde_json::from_str(body).map_err(|err| {
        log::debug!(
            "Unparsable response body: {}...",
            body_prefix(body, LOGGED_BODY_PREFIX)
        );
        FetchError::MalformedPayload(format!("Invalid response from server: {err}"))
    })
}

fn body_prefix(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
