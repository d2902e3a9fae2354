//! Detail lookup for the selected movie.

use super::supersede::Supersede;
use crate::models::MovieDetail;
use crate::services::MovieApi;
use crate::{Error, Result};
use std::sync::Arc;
use tokio::sync::watch;

/// Detail status.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailStatus {
    /// Nothing selected.
    #[default]
    Idle,
    Loading,
    Ready(MovieDetail),
    /// The catalog has no such title; carries the upstream message.
    Unavailable(String),
    /// Network or decoding failure.
    Failed(String),
}

/// Observable detail state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    /// Identifier the state belongs to.
    pub id: Option<String>,
    pub status: DetailStatus,
    generation: u64,
}

impl DetailState {
    /// The loaded detail, if ready.
    pub fn detail(&self) -> Option<&MovieDetail> {
        match &self.status {
            DetailStatus::Ready(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Fetch one movie's details. Always a fresh request.
pub async fn fetch_detail(api: &dyn MovieApi, id: &str) -> Result<MovieDetail> {
    api.details(id).await
}

/// Detail controller: one fetch per selected identifier, last selection wins.
pub struct MovieDetailFetch {
    api: Arc<dyn MovieApi>,
    requests: Supersede,
    state: Arc<watch::Sender<DetailState>>,
}

impl MovieDetailFetch {
    /// Create a detail controller.
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            api,
            requests: Supersede::new(),
            state: Arc::new(state),
        }
    }

    /// Fetch details for `id`, superseding any in-flight fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn fetch(&mut self, id: &str) {
        let generation = self.requests.issue();
        let id = id.to_string();

        self.state.send_modify(|s| {
            s.id = Some(id.clone());
            s.status = DetailStatus::Loading;
            s.generation = generation;
        });

        let api = self.api.clone();
        let state = self.state.clone();
        let handle = tokio::spawn(async move {
            let outcome = fetch_detail(api.as_ref(), &id).await;
            apply_outcome(&state, generation, outcome);
        });
        self.requests.track(handle);
    }

    /// Abort any in-flight fetch and reset to idle.
    pub fn clear(&mut self) {
        let generation = self.requests.cancel();
        self.state.send_modify(|s| {
            *s = DetailState {
                generation,
                ..Default::default()
            };
        });
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    /// Wait until the current fetch has settled (not loading).
    pub async fn settled(&self) -> DetailState {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(|s| s.status != DetailStatus::Loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

fn apply_outcome(
    state: &watch::Sender<DetailState>,
    generation: u64,
    outcome: Result<MovieDetail>,
) {
    state.send_if_modified(|s| {
        if s.generation != generation {
            tracing::debug!("Discarding stale detail (generation {})", generation);
            return false;
        }

        s.status = match outcome {
            Ok(detail) => DetailStatus::Ready(detail),
            Err(e) if e.is_cancelled() => DetailStatus::Idle,
            Err(Error::NotFound(message)) => {
                tracing::info!("No details for {:?}: {}", s.id, message);
                DetailStatus::Unavailable(message)
            }
            Err(e) => {
                tracing::warn!("Detail fetch for {:?} failed: {}", s.id, e);
                DetailStatus::Failed(e.to_string())
            }
        };
        true
    });
}
