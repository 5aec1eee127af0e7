//! Typed, failure-tolerant client for the ImpactHub backend.
//!
//! # Overview
//! `ApiClient` builds `HttpRequest` values and classifies `HttpResponse`
//! values; a `Transport` performs the round-trip. `ResilientClient` puts the
//! two together and turns every failure into the caller's fallback value.
//! `ImpactHubApi` binds one path and one fallback per backend resource.
//!
//! # Design
//! - The request/response boundary is plain data, so tests script the
//!   network with a closure instead of a server.
//! - Credentials are injected through `CredentialProvider` and read at
//!   request-build time.
//! - `Fetched<T>` keeps the live/fallback distinction for callers that want
//!   it; the accessors collapse it.
//! - DTOs are defined independently from the mock server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fallback;
pub mod filters;
pub mod http;
pub mod resilient;
pub mod services;
pub mod transport;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use config::ClientConfig;
pub use credentials::{
    CredentialProvider, FileStorage, KeyValueStorage, MemoryStorage, NoCredentials, StaticToken, StoredToken,
    AUTH_TOKEN_KEY,
};
pub use error::ApiError;
pub use filters::{DonorFilters, EventFilters, ItemFilters, ListFilter, VolunteerFilters};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resilient::{Fetched, ResilientClient};
pub use services::{ImpactHubApi, LIST_QUERY};
pub use transport::{Transport, UreqTransport, REQUEST_TIMEOUT};
