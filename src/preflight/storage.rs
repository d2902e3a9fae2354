//! Storage directory preflight check.

use super::CheckResult;
use crate::utils::fs;
use std::path::Path;

/// Check that the data directory is writable.
pub fn check(data_dir: &Path) -> CheckResult {
    match fs::ensure_writable(data_dir) {
        Ok(()) => CheckResult::passed("Storage", data_dir.display().to_string()),
        Err(e) => CheckResult::failed(
            "Storage",
            format!("{} is not writable ({})", data_dir.display(), e),
            "Pass --data-dir or set [storage] data_dir in config.toml",
        ),
    }
}
