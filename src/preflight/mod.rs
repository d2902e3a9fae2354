//! Startup checks run before commands that need the catalog or the data dir.

mod omdb;
mod storage;

use crate::models::config::Config;
use colored::Colorize;
use std::fmt;

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Passed, with what was found.
    Passed(String),
    /// Failed, with the reason and how to fix it.
    Failed { reason: String, fix: String },
}

/// A named check and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
}

impl CheckResult {
    pub fn passed(name: &'static str, found: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Passed(found.into()),
        }
    }

    pub fn failed(name: &'static str, reason: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Failed {
                reason: reason.into(),
                fix: fix.into(),
            },
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed(_))
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            CheckStatus::Passed(found) => {
                write!(f, "{} {:<10} {}", "✓".green(), self.name.bold(), found)
            }
            CheckStatus::Failed { reason, fix } => write!(
                f,
                "{} {:<10} {}\n  {}",
                "✗".red(),
                self.name.bold(),
                reason,
                fix.dimmed()
            ),
        }
    }
}

/// Run every check. Checks are independent and all of them run.
pub async fn run_preflight_checks(config: &Config) -> Vec<CheckResult> {
    vec![
        omdb::check(&config.omdb).await,
        storage::check(&config.storage.data_dir),
    ]
}

pub fn print_results(results: &[CheckResult]) {
    for result in results {
        println!("{}", result);
    }
}

pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(CheckResult::is_passed)
}
