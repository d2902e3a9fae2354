//! OMDb API preflight check.

use super::CheckResult;
use crate::models::config::OmdbConfig;
use crate::services::omdb::OmdbClient;

const NAME: &str = "OMDb API";

/// Check if the OMDb API is reachable and accepts the key.
pub async fn check(config: &OmdbConfig) -> CheckResult {
    match OmdbClient::from_config(config) {
        Ok(client) => match client.verify_api_key().await {
            Ok(true) => CheckResult::passed(NAME, "connected"),
            Ok(false) => CheckResult::failed(
                NAME,
                "invalid API key",
                "Check your OMDB_API_KEY environment variable",
            ),
            Err(_) => CheckResult::failed(
                NAME,
                "connection failed",
                "Check your network connection",
            ),
        },
        Err(_) => CheckResult::failed(
            NAME,
            "API key not configured",
            "Set OMDB_API_KEY or [omdb] api_key in config.toml",
        ),
    }
}
