//! Request builder and response classifier for the ImpactHub API.
//!
//! # Design
//! `ApiClient` holds the base URL and a credential provider and nothing else.
//! `build` produces an `HttpRequest`, `parse` consumes an `HttpResponse`; the
//! round-trip in between belongs to a `Transport`. The token is looked up at
//! build time, never cached.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use crate::credentials::{CredentialProvider, NoCredentials};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Base path used when none is configured.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Stateless request builder bound to a base URL and a credential source.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: impl CredentialProvider + 'static) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            base_url,
            credentials: Arc::new(credentials),
        }
    }

    /// Client on the default base path without credentials.
    pub fn anonymous() -> Self {
        Self::new(DEFAULT_BASE_URL, NoCredentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path` relative to the base URL.
    pub fn build<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = Vec::new();
        let body = match body {
            Some(input) => {
                let json = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(json)
            }
            None => None,
        };
        if let Some(token) = self.credentials.bearer_token() {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        Ok(HttpRequest {
            method,
            path: format!("{}{}", self.base_url, path),
            headers,
            body,
        })
    }

    /// Classify a response and deserialize its body on 2xx.
    pub fn parse<T: DeserializeOwned>(&self, path: &str, response: &HttpResponse) -> Result<T, ApiError> {
        check_status(path, response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Log the statuses the backend treats as notable and map non-2xx to errors.
fn check_status(path: &str, response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        401 => warn!(path, "unauthorized: missing or expired token"),
        403 => warn!(path, "forbidden: insufficient permissions"),
        500 => error!(path, body = %response.body, "server error"),
        _ => {}
    }
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_status(response.status, &response.body))
}
