//! Bearer-token sources.
//!
//! # Design
//! The client never reaches into ambient storage. A `CredentialProvider` is
//! handed to `ApiClient` at construction and asked for a token every time a
//! request is built, so a token stored or cleared between two calls is
//! observed by the second one. The client only reads; writing the token is
//! the login flow's business.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Fixed key under which the bearer token is persisted.
pub const AUTH_TOKEN_KEY: &str = "impacthub_token";

/// Supplies the bearer token for outgoing requests, if any.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Never attaches a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Always attaches the same token.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        non_empty(Some(self.0.clone()))
    }
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn bearer_token(&self) -> Option<String> {
        non_empty(self())
    }
}

/// String key/value storage persisted on the client side.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// In-process storage. Items can be set and removed while clients hold it.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: &str, value: &str) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(&self, key: &str) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        items.get(key).cloned()
    }
}

/// Storage backed by a JSON object on disk.
///
/// The file is re-read on every lookup. A missing or unreadable file, or a
/// non-string value, reads as absent.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let items: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw).ok()?;
        items.get(key)?.as_str().map(str::to_string)
    }
}

/// Reads the token from a storage under `AUTH_TOKEN_KEY` at call time.
#[derive(Debug)]
pub struct StoredToken<S> {
    storage: S,
}

impl<S: KeyValueStorage> StoredToken<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> CredentialProvider for StoredToken<S> {
    fn bearer_token(&self) -> Option<String> {
        non_empty(self.storage.get_item(AUTH_TOKEN_KEY))
    }
}

impl<S: KeyValueStorage> KeyValueStorage for std::sync::Arc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn static_token_empty_is_absent() {
        assert_eq!(StaticToken("abc".into()).bearer_token().as_deref(), Some("abc"));
        assert_eq!(StaticToken(String::new()).bearer_token(), None);
        assert_eq!(NoCredentials.bearer_token(), None);
    }

    #[test]
    fn closure_provider() {
        let provider = || Some("from-closure".to_string());
        assert_eq!(provider.bearer_token().as_deref(), Some("from-closure"));
    }

    #[test]
    fn stored_token_observes_changes() {
        let storage = Arc::new(MemoryStorage::new());
        let provider = StoredToken::new(Arc::clone(&storage));
        assert_eq!(provider.bearer_token(), None);

        storage.set_item(AUTH_TOKEN_KEY, "abc123");
        assert_eq!(provider.bearer_token().as_deref(), Some("abc123"));

        storage.remove_item(AUTH_TOKEN_KEY);
        assert_eq!(provider.bearer_token(), None);
    }

    #[test]
    fn stored_token_ignores_other_keys() {
        let storage = MemoryStorage::new();
        storage.set_item("theme", "dark");
        assert_eq!(StoredToken::new(storage).bearer_token(), None);
    }

    #[test]
    fn file_storage_reads_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let provider = StoredToken::new(FileStorage::new(&path));

        assert_eq!(provider.bearer_token(), None, "missing file");

        std::fs::write(&path, r#"{"impacthub_token":"disk-token","theme":"dark"}"#).unwrap();
        assert_eq!(provider.bearer_token().as_deref(), Some("disk-token"));

        std::fs::write(&path, r#"{"impacthub_token":42}"#).unwrap();
        assert_eq!(provider.bearer_token(), None, "non-string value");

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(provider.bearer_token(), None, "corrupt file");
    }
}
