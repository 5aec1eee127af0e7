//! Fetch-with-fallback wrapper around `ApiClient` and a `Transport`.
//!
//! # Design
//! Every call is a single attempt. Whatever goes wrong (serialization,
//! transport, timeout, non-2xx, bad JSON) the caller gets back the fallback
//! value it supplied, after a warning is logged. No retry, no caching, no
//! shared state between calls.
//!
//! The per-verb methods (`get`, `post`, ...) return plain `T`, so live data
//! and fallback data look the same. The `*_tagged` variants return
//! `Fetched<T>` for callers that need to know which one they got.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;

/// Outcome of a resilient call.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The server answered with a 2xx and a well-formed body.
    Live(T),
    /// The call failed; `data` is the caller's fallback.
    Fallback { data: T, cause: ApiError },
}

impl<T> Fetched<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn cause(&self) -> Option<&ApiError> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { cause, .. } => Some(cause),
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(data) => Fetched::Live(f(data)),
            Fetched::Fallback { data, cause } => Fetched::Fallback { data: f(data), cause },
        }
    }
}

/// Request builder plus transport, with the fallback policy applied.
#[derive(Debug, Clone)]
pub struct ResilientClient<T> {
    client: ApiClient,
    transport: T,
}

impl<T: Transport> ResilientClient<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue one request and return the live body or the fallback.
    pub fn fetch<B, R>(&self, method: HttpMethod, path: &str, body: Option<&B>, fallback: R) -> Fetched<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.try_fetch(method, path, body) {
            Ok(data) => {
                debug!(%method, path, "live response");
                Fetched::Live(data)
            }
            Err(cause) => {
                warn!(%method, path, error = %cause, "request failed, using fallback data");
                Fetched::Fallback { data: fallback, cause }
            }
        }
    }

    fn try_fetch<B, R>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.client.build(method, path, body)?;
        let response = self.transport.execute(&request)?;
        self.client.parse(path, &response)
    }

    pub fn get_tagged<R: DeserializeOwned>(&self, path: &str, fallback: R) -> Fetched<R> {
        self.fetch::<(), R>(HttpMethod::Get, path, None, fallback)
    }

    pub fn post_tagged<B, R>(&self, path: &str, body: &B, fallback: R) -> Fetched<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(HttpMethod::Post, path, Some(body), fallback)
    }

    pub fn put_tagged<B, R>(&self, path: &str, body: &B, fallback: R) -> Fetched<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(HttpMethod::Put, path, Some(body), fallback)
    }

    pub fn patch_tagged<B, R>(&self, path: &str, body: &B, fallback: R) -> Fetched<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(HttpMethod::Patch, path, Some(body), fallback)
    }

    pub fn delete_tagged<R: DeserializeOwned>(&self, path: &str, fallback: R) -> Fetched<R> {
        self.fetch::<(), R>(HttpMethod::Delete, path, None, fallback)
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str, fallback: R) -> R {
        self.get_tagged(path, fallback).into_inner()
    }

    pub fn post<B, R>(&self, path: &str, body: &B, fallback: R) -> R
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post_tagged(path, body, fallback).into_inner()
    }

    pub fn put<B, R>(&self, path: &str, body: &B, fallback: R) -> R
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.put_tagged(path, body, fallback).into_inner()
    }

    pub fn patch<B, R>(&self, path: &str, body: &B, fallback: R) -> R
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.patch_tagged(path, body, fallback).into_inner()
    }

    pub fn delete<R: DeserializeOwned>(&self, path: &str, fallback: R) -> R {
        self.delete_tagged(path, fallback).into_inner()
    }
}
