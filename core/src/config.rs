//! Client configuration read from the environment.

use crate::client::DEFAULT_BASE_URL;

/// Environment variable holding the API base path or URL.
pub const API_URL_ENV: &str = "IMPACTHUB_API_URL";

/// Environment variable holding the origin used to resolve a relative base.
pub const ORIGIN_ENV: &str = "IMPACTHUB_ORIGIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prepended to every endpoint path, e.g. `/api` or `https://hub.example.org/api`.
    pub base_url: String,
    /// Scheme and host for relative base URLs, e.g. `http://localhost:3000`.
    pub origin: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            base_url: read(API_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            origin: read(ORIGIN_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_relative_api() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "/api");
        assert!(config.origin.is_none());
    }

    #[test]
    fn reads_both_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://hub.example.org/api"),
            (ORIGIN_ENV, "http://localhost:8080"),
        ]));
        assert_eq!(config.base_url, "https://hub.example.org/api");
        assert_eq!(config.origin.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_ENV, "  "), (ORIGIN_ENV, "")]));
        assert_eq!(config, ClientConfig::default());
    }
}
