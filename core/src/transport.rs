//! Network execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. `UreqTransport` is the
//! production implementation: a blocking ureq agent that hands every status
//! back as data so `ApiClient::parse` alone decides what counts as failure.
//! Closures implement `Transport` too, which is how tests script the network.

use std::time::Duration;

use tracing::debug;
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, RequestBuilder};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes a request and returns the raw response.
///
/// Non-2xx statuses are responses, not errors. Errors are reserved for
/// requests that never produced a response.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, ApiError> + Send + Sync,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}

/// Blocking HTTP transport built on ureq.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
    origin: Option<String>,
}

impl UreqTransport {
    /// Transport with the standard 30 second timeout.
    ///
    /// `origin` (e.g. `http://localhost:3000`) resolves request paths that
    /// start with `/`. Absolute URLs are used as-is.
    pub fn new(origin: Option<&str>) -> Self {
        Self::with_timeout(origin, REQUEST_TIMEOUT)
    }

    /// Transport with a custom timeout. Harnesses use this to reach the
    /// timeout path without waiting half a minute.
    pub fn with_timeout(origin: Option<&str>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            origin: origin.map(|o| o.trim_end_matches('/').to_string()),
        }
    }

    fn resolve(&self, path: &str) -> Result<String, ApiError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.to_string());
        }
        match &self.origin {
            Some(origin) => Ok(format!("{origin}{path}")),
            None => Err(ApiError::Configuration(format!(
                "relative path {path} needs an origin"
            ))),
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.resolve(&request.path)?;
        debug!(method = %request.method, %url, "sending request");

        let result = match request.method {
            HttpMethod::Get => without_body(self.agent.get(&url), request).call(),
            HttpMethod::Delete => without_body(self.agent.delete(&url), request).call(),
            HttpMethod::Post => send(self.agent.post(&url), request),
            HttpMethod::Put => send(self.agent.put(&url), request),
            HttpMethod::Patch => send(self.agent.patch(&url), request),
        };
        let mut response = result.map_err(map_ureq_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(map_ureq_error)?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn without_body(builder: RequestBuilder<WithoutBody>, request: &HttpRequest) -> RequestBuilder<WithoutBody> {
    with_headers(builder, request)
}

fn send(
    builder: RequestBuilder<WithBody>,
    request: &HttpRequest,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    let builder = with_headers(builder, request);
    match &request.body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

fn map_ureq_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(_) => ApiError::Timeout,
        other => ApiError::Transport(other.to_string()),
    }
}
