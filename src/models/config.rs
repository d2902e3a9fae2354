//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OMDb configuration.
    pub omdb: OmdbConfig,
    /// Search behaviour.
    pub search: SearchConfig,
    /// Where the watched list is kept.
    pub storage: StorageConfig,
}

/// OMDb configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL of the API.
    pub base_url: String,
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this never reach the network.
    pub min_query_len: usize,
    /// Delay before a query is sent, in milliseconds.
    pub debounce_ms: u64,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted lists.
    pub data_dir: PathBuf,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://www.omdbapi.com".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            debounce_ms: 0,
        }
    }
}

impl SearchConfig {
    /// Debounce as a duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("popcorn"),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("popcorn")
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from file, then apply environment overrides.
pub fn load_config() -> Config {
    let config_path = config_file_path();

    let mut config = Config::default();
    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(parsed) => config = parsed,
                Err(e) => tracing::warn!(
                    "Ignoring invalid config {}: {}",
                    config_path.display(),
                    e
                ),
            },
            Err(e) => tracing::warn!("Failed to read config {}: {}", config_path.display(), e),
        }
    }

    apply_env(&mut config, std::env::var("OMDB_API_KEY").ok());
    config
}

fn apply_env(config: &mut Config, api_key: Option<String>) {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.omdb.api_key = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.search.debounce(), Duration::ZERO);
        assert_eq!(config.omdb.base_url, "https://www.omdbapi.com");
        assert!(config.storage.data_dir.ends_with("popcorn"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            debounce_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.min_query_len, 3);
        assert!(config.omdb.api_key.is_none());
    }

    #[test]
    fn test_env_overrides_api_key() {
        let mut config: Config = toml::from_str("[omdb]\napi_key = \"from-file\"").unwrap();
        apply_env(&mut config, Some("from-env".to_string()));
        assert_eq!(config.omdb.api_key.as_deref(), Some("from-env"));

        apply_env(&mut config, Some("  ".to_string()));
        assert_eq!(config.omdb.api_key.as_deref(), Some("from-env"));
    }
}
