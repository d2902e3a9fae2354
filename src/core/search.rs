//! Movie search with last-query-wins semantics.
//!
//! Every query change supersedes the request for the previous query: its task
//! is aborted and, should it still complete, its outcome is discarded because
//! the generation it carries is no longer current.

use super::query::SearchQuery;
use super::supersede::Supersede;
use crate::models::config::SearchConfig;
use crate::models::Movie;
use crate::services::MovieApi;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Message shown when the catalog has no match.
pub const NO_RESULTS_MESSAGE: &str = "No movies found.";

/// Search status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// No search issued (query empty or too short).
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Observable search state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    /// Query this state belongs to.
    pub query: String,
    /// Results, unique by identifier, in catalog order.
    pub results: Vec<Movie>,
    pub status: SearchStatus,
    pub error_message: Option<String>,
    #[serde(skip)]
    generation: u64,
}

/// Search controller.
pub struct MovieSearch {
    api: Arc<dyn MovieApi>,
    min_query_len: usize,
    debounce: Duration,
    query: SearchQuery,
    requests: Supersede,
    state: Arc<watch::Sender<SearchState>>,
}

impl MovieSearch {
    /// Create a search controller.
    pub fn new(api: Arc<dyn MovieApi>, config: &SearchConfig) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            api,
            min_query_len: config.min_query_len,
            debounce: config.debounce(),
            query: SearchQuery::default(),
            requests: Supersede::new(),
            state: Arc::new(state),
        }
    }

    /// Update the query, superseding any in-flight request.
    ///
    /// Must be called from within a Tokio runtime when the query is long
    /// enough to be sent.
    pub fn search(&mut self, query: &str) {
        if !self.query.set(query) {
            return;
        }

        let generation = self.requests.issue();
        let query = self.query.as_str().to_string();

        if !self.query.is_searchable(self.min_query_len) {
            self.state.send_modify(|s| {
                *s = SearchState {
                    query,
                    generation,
                    ..Default::default()
                };
            });
            return;
        }

        self.state.send_modify(|s| {
            s.query = query.clone();
            s.generation = generation;
            s.results.clear();
            s.status = SearchStatus::Loading;
            s.error_message = None;
        });

        let api = self.api.clone();
        let state = self.state.clone();
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }
            tracing::debug!("Searching for {:?} (generation {})", query, generation);
            let outcome = api.search(&query).await;
            apply_outcome(&state, generation, outcome);
        });
        self.requests.track(handle);
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Wait until the current query has settled (not loading).
    pub async fn settled(&self) -> SearchState {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(|s| s.status != SearchStatus::Loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

/// Apply a finished request to the state, unless it has been superseded.
fn apply_outcome(
    state: &watch::Sender<SearchState>,
    generation: u64,
    outcome: Result<Vec<Movie>>,
) {
    state.send_if_modified(|s| {
        if s.generation != generation {
            tracing::debug!(
                "Discarding stale search result (generation {}, current {})",
                generation,
                s.generation
            );
            return false;
        }

        match outcome {
            Ok(movies) => {
                s.results = dedup_by_id(movies);
                s.status = SearchStatus::Ready;
                s.error_message = None;
            }
            Err(e) if e.is_cancelled() => {
                s.results.clear();
                s.status = SearchStatus::Idle;
                s.error_message = None;
            }
            Err(Error::NotFound(upstream)) => {
                tracing::debug!("No results for {:?}: {}", s.query, upstream);
                s.results.clear();
                s.status = SearchStatus::Error;
                s.error_message = Some(NO_RESULTS_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", s.query, e);
                s.results.clear();
                s.status = SearchStatus::Error;
                s.error_message = Some(e.to_string());
            }
        }
        true
    });
}

/// Drop repeated identifiers, keeping the first occurrence in order.
pub fn dedup_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|m| seen.insert(m.id.clone()))
        .collect()
}
