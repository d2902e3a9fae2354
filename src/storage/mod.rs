//! Durable key-value storage and the list wrapper built on it.

mod file;
mod list;
mod memory;

pub use file::FileStore;
pub use list::{rejected_prefix, PersistentList, STORE_VERSION};
pub use memory::MemoryStore;

use crate::Result;

/// A string-valued key-value store.
///
/// Each key has a single owner; implementations do not coordinate
/// concurrent writers to the same key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. No-op if absent.
    fn remove(&self, key: &str) -> Result<()>;
}
