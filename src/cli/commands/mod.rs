//! CLI command implementations.

pub mod interactive;
pub mod search;
pub mod show;
pub mod watched;

use crate::models::config::Config;
use crate::services::omdb::OmdbClient;
use crate::services::MovieApi;
use crate::storage::{FileStore, KeyValueStore};
use std::sync::Arc;

/// Open the catalog client from configuration.
pub fn connect(config: &Config) -> crate::Result<Arc<dyn MovieApi>> {
    Ok(Arc::new(OmdbClient::from_config(&config.omdb)?))
}

/// Open the store holding the watched list.
pub fn open_store(config: &Config) -> Arc<dyn KeyValueStore> {
    Arc::new(FileStore::new(&config.storage.data_dir))
}
