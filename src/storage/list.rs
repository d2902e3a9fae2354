//! A whole-collection persisted list.

use super::KeyValueStore;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

/// Current persisted format version.
pub const STORE_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    saved_at: DateTime<Utc>,
    items: &'a [T],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored<T> {
    Versioned { version: u32, items: Vec<T> },
    /// Bare array written before the envelope existed.
    Legacy(Vec<T>),
}

/// Prefix of the keys under which unreadable values of `key` are kept.
pub fn rejected_prefix(key: &str) -> String {
    format!("{}-rejected-", key)
}

/// An ordered collection of records stored under one key.
///
/// Every save replaces the whole collection. Loading never fails: a missing
/// or undecodable value is an empty collection.
pub struct PersistentList<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PersistentList<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a list to `key` in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the saved collection, or an empty one.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Stored<T>>(&raw) {
            Ok(Stored::Versioned { version, items }) if version == STORE_VERSION => items,
            Ok(Stored::Versioned { version, .. }) => {
                tracing::warn!(
                    "'{}' was written by a newer format (v{}), starting empty",
                    self.key,
                    version
                );
                self.preserve_rejected(&raw);
                Vec::new()
            }
            Ok(Stored::Legacy(items)) => {
                tracing::info!(
                    "Upgrading '{}' from the unversioned format ({} items)",
                    self.key,
                    items.len()
                );
                items
            }
            Err(e) => {
                tracing::warn!("Failed to decode '{}', starting empty: {}", self.key, e);
                self.preserve_rejected(&raw);
                Vec::new()
            }
        }
    }

    /// Copy an unreadable value to its own key so later saves cannot
    /// overwrite it.
    fn preserve_rejected(&self, raw: &str) {
        let key = format!(
            "{}{}",
            rejected_prefix(&self.key),
            Utc::now().format("%Y%m%d%H%M%S%3f")
        );
        match self.store.set(&key, raw) {
            Ok(()) => tracing::warn!("Kept the unreadable value of '{}' as '{}'", self.key, key),
            Err(e) => tracing::warn!("Failed to keep the unreadable value of '{}': {}", self.key, e),
        }
    }

    /// Replace the stored collection with `items`.
    pub fn save(&self, items: &[T]) -> Result<()> {
        let envelope = Envelope {
            version: STORE_VERSION,
            saved_at: Utc::now(),
            items,
        };
        let content = serde_json::to_string_pretty(&envelope)?;
        self.store.set(&self.key, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        score: u32,
    }

    fn records() -> Vec<Record> {
        vec![
            Record { id: "b".into(), score: 2 },
            Record { id: "a".into(), score: 1 },
        ]
    }

    fn list(store: &Arc<MemoryStore>) -> PersistentList<Record> {
        PersistentList::new(store.clone() as Arc<dyn KeyValueStore>, "records")
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = Arc::new(MemoryStore::new());
        assert!(list(&store).load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = Arc::new(MemoryStore::new());
        let list = list(&store);

        list.save(&records()).unwrap();
        assert_eq!(list.load(), records());

        list.save(&records()[..1]).unwrap();
        assert_eq!(list.load(), records()[..1].to_vec());
    }

    #[test]
    fn test_saved_value_is_versioned() {
        let store = Arc::new(MemoryStore::new());
        list(&store).save(&records()).unwrap();

        let raw = store.get("records").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], STORE_VERSION);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_load_legacy_bare_array() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("records", r#"[{"id":"b","score":2},{"id":"a","score":1}]"#)
            .unwrap();
        assert_eq!(list(&store).load(), records());
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set("records", "{not json").unwrap();
        assert!(list(&store).load().is_empty());

        store.set("records", r#"{"unexpected":true}"#).unwrap();
        assert!(list(&store).load().is_empty());
    }

    #[test]
    fn test_unreadable_value_survives_later_saves() {
        let store = Arc::new(MemoryStore::new());
        store.set("records", "{not json").unwrap();

        let list = list(&store);
        assert!(list.load().is_empty());
        list.save(&records()).unwrap();
        list.save(&records()[..1]).unwrap();

        let kept: Vec<_> = store
            .keys()
            .into_iter()
            .filter(|k| k.starts_with(&rejected_prefix("records")))
            .collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(store.get(&kept[0]).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_readable_value_is_not_kept_aside() {
        let store = Arc::new(MemoryStore::new());
        let list = list(&store);
        list.save(&records()).unwrap();
        assert_eq!(list.load().len(), 2);

        assert_eq!(store.keys(), vec!["records".to_string()]);
    }

    #[test]
    fn test_load_newer_version_is_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("records", r#"{"version":99,"items":[{"id":"a","score":1}]}"#)
            .unwrap();
        assert!(list(&store).load().is_empty());
    }
}
