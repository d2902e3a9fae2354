//! Watched list rules on top of the persisted list.

use crate::models::{WatchedEntry, WatchedSummary};
use crate::storage::{KeyValueStore, PersistentList};
use std::sync::Arc;

/// Storage key of the watched list.
pub const WATCHED_KEY: &str = "watched";

/// Owner of the watched list. Sole writer of its storage key.
pub struct WatchedListController {
    list: PersistentList<WatchedEntry>,
    entries: Vec<WatchedEntry>,
}

impl WatchedListController {
    /// Load the watched list from `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, WATCHED_KEY)
    }

    /// Load a watched list kept under a different key.
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let list = PersistentList::new(store, key);
        let entries = list.load();
        tracing::debug!("Loaded {} watched entries from '{}'", entries.len(), key);
        Self { list, entries }
    }

    /// Add `entry` unless its identifier is already present.
    /// Returns whether it was added.
    pub fn add(&mut self, entry: WatchedEntry) -> bool {
        if self.contains(entry.id()) {
            tracing::debug!("{} is already watched", entry.id());
            return false;
        }
        tracing::info!("Added {} to watched list", entry.detail.title);
        self.entries.push(entry);
        self.persist();
        true
    }

    /// Remove the entry with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        if self.entries.len() == before {
            return false;
        }
        tracing::info!("Removed {} from watched list", id);
        self.persist();
        true
    }

    /// Summary statistics over the current list.
    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary::from_entries(&self.entries)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn persist(&self) {
        if let Err(e) = self.list.save(&self.entries) {
            tracing::warn!("Failed to save watched list '{}': {}", self.list.key(), e);
        }
    }
}
