//! Key-value storage
//!
//! Durable, synchronous, string-keyed storage. The dashboard keeps its liked
//! quotes under a single key as one JSON document.

use crate::store::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod error;
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing was written yet.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads `key` and decodes it as JSON.
///
/// A missing key yields `Ok(None)`. An unparseable value is an error; callers
/// decide whether that is fatal.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and writes it under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_load_json_missing_key_is_none() {
        let store = MemoryStore::new();
        let value: Option<Vec<String>> = load_json(&store, "absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load_json() {
        let store = MemoryStore::new();
        let mut value = HashMap::new();
        value.insert("a".to_string(), 1u32);
        save_json(&store, "map", &value).unwrap();

        let loaded: Option<HashMap<String, u32>> = load_json(&store, "map").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    // Garbage under a key surfaces as a serialization error, not a panic.
    fn test_load_json_rejects_garbage() {
        let store = MemoryStore::new();
        store.set("bad", "not json").unwrap();
        let result: Result<Option<Vec<String>>, _> = load_json(&store, "bad");
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }
}
