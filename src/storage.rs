//! Persistent Key-Value Shim
//!
//! Storage is a convenience: every failure (quota, disabled storage, no
//! window) is turned into "absent" on read and a no-op on write, so the
//! page stays usable with storage switched off.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

/// Fallible storage backend; callers use the infallible `get`/`set`
pub trait KeyValueStore: Send + Sync {
    fn try_get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn try_set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read `key`, treating every failure as absent
    fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("storage read ignored: {}", e);
                None
            }
        }
    }

    /// Write `key`, silently dropping failures
    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value) {
            log::debug!("storage write ignored: {}", e);
        }
    }
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn try_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory store for tests and storage-less contexts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn try_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared handle to the active store, handed to each stateful feature
#[derive(Clone)]
pub struct Persistence(Arc<dyn KeyValueStore>);

impl Persistence {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    /// `localStorage` when the page can reach it, otherwise an in-memory
    /// store that lives as long as the tab
    pub fn browser() -> Self {
        match BrowserStorage::storage() {
            Ok(_) => Self::new(BrowserStorage),
            Err(e) => {
                log::info!("using in-memory storage: {}", e);
                Self::new(MemoryStore::new())
            }
        }
    }
}

impl Deref for Persistence {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
