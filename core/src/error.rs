//! Error types for the ImpactHub API client.
//!
//! # Design
//! 401, 403 and 404 get dedicated variants because they are the statuses the
//! client logs or reports specially. Every other non-2xx response lands in
//! `HttpError` with the raw status and body. Inside the resilient wrapper all
//! variants lead to the same outcome (the fallback value); callers that opt
//! into `Fetched` can still inspect which one occurred.

use thiserror::Error;

/// Errors produced while building, executing or parsing a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 401.
    #[error("unauthorized")]
    Unauthorized,

    /// The server returned 403.
    #[error("forbidden")]
    Forbidden,

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status not covered above.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request did not complete within the timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent or the response could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client is misconfigured, e.g. a relative URL without an origin.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Map a non-2xx status to its error variant.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::HttpError {
                status,
                body: body.to_string(),
            },
        }
    }
}
