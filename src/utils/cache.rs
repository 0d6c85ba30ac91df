//! Caching for REST responses.
//!
//! sessionStorage-backed, so repeated navigation within one session never
//! refetches, while a fresh visit always sees fresh content. Keys are
//! namespaced under [`crate::config::CACHE_PREFIX`].

use serde::{Serialize, de::DeserializeOwned};

use crate::config::CACHE_PREFIX;

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone)]
pub enum CacheError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage.
    WriteFailed,
}

fn storage_key(key: &str) -> String {
    format!("{CACHE_PREFIX}{key}")
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(&storage_key(key)).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(&storage_key(key), &json)
        .map_err(|_| CacheError::WriteFailed)
}
