use crate::error::CacheError;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value store of resolved page titles, keyed by the URL exactly as it
/// appeared in the message.
///
/// A stored empty string means "fetched, page has an empty title". A missing
/// key means the URL was never resolved.
pub trait TitleStore: Send + Sync {
    /// Backend name, used in logs.
    fn name(&self) -> &str;

    fn has(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// With `overwrite = false` the insert is strict and fails with
    /// [`CacheError::DuplicateKey`] when the key already exists. The check and
    /// the write happen under the same lock.
    fn set(&self, key: &str, value: &str, overwrite: bool) -> Result<(), CacheError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process [`TitleStore`] backed by a `HashMap` behind an `RwLock`.
#[derive(Debug, Default)]
pub struct TitleCache {
    entries: RwLock<HashMap<String, String>>,
}

impl TitleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert that always overwrites; what the fetch pipeline uses.
    pub fn insert(&self, key: &str, value: &str) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
    }
}

impl TitleStore for TitleCache {
    fn name(&self) -> &str {
        "memory"
    }

    fn has(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str, overwrite: bool) -> Result<(), CacheError> {
        if overwrite {
            self.insert(key, value);
            return Ok(());
        }

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if entries.contains_key(key) {
            return Err(CacheError::DuplicateKey {
                key: key.to_string(),
            });
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}
