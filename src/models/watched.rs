//! Watched list data models.

use super::movie::MovieDetail;
use serde::{Deserialize, Serialize};

/// A movie the user has watched and rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedEntry {
    /// Snapshot of the movie at the time it was added.
    #[serde(flatten)]
    pub detail: MovieDetail,
    /// User rating (0-10).
    pub user_rating: f32,
    /// How many times the rating was changed before it was committed.
    #[serde(default)]
    pub count_rating_decision: u32,
}

impl WatchedEntry {
    /// Catalog identifier, the identity of the entry.
    pub fn id(&self) -> &str {
        &self.detail.id
    }
}

/// Summary statistics over the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WatchedSummary {
    /// Number of entries.
    pub count: usize,
    /// Mean external rating.
    pub avg_imdb_rating: f64,
    /// Mean user rating.
    pub avg_user_rating: f64,
    /// Mean runtime in minutes.
    pub avg_runtime: f64,
}

impl WatchedSummary {
    /// Compute the summary for a list of entries. Means of an empty list are 0.
    pub fn from_entries(entries: &[WatchedEntry]) -> Self {
        Self {
            count: entries.len(),
            avg_imdb_rating: average(entries.iter().map(|e| e.detail.imdb_rating as f64)),
            avg_user_rating: average(entries.iter().map(|e| e.user_rating as f64)),
            avg_runtime: average(entries.iter().map(|e| e.detail.runtime as f64)),
        }
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
