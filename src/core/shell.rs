//! Composition root wiring the controllers together.
//!
//! A renderer reads the views (`search_view`, `selection`, `detail_view`,
//! `watched`, `summary`) and drives the app through the `on_*` callbacks.

use super::detail::{DetailState, DetailStatus, MovieDetailFetch};
use super::rating::RatingDraft;
use super::search::{MovieSearch, SearchState};
use super::selection::{Selection, SelectionController};
use super::watched::WatchedListController;
use crate::models::config::SearchConfig;
use crate::models::{WatchedEntry, WatchedSummary};
use crate::services::MovieApi;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Title shown when no movie is open.
pub const APP_TITLE: &str = "Popcorn!";

/// Keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Close the open movie.
    Escape,
    /// Clear the search box.
    Enter,
}

/// The application: search, selection, details, and the watched list.
pub struct AppShell {
    search: MovieSearch,
    selection: SelectionController,
    detail: MovieDetailFetch,
    watched: WatchedListController,
    draft: RatingDraft,
}

impl AppShell {
    /// Build the app on top of a catalog and a store.
    pub fn new(
        api: Arc<dyn MovieApi>,
        store: Arc<dyn KeyValueStore>,
        config: &SearchConfig,
    ) -> Self {
        Self {
            search: MovieSearch::new(api.clone(), config),
            selection: SelectionController::new(),
            detail: MovieDetailFetch::new(api),
            watched: WatchedListController::new(store),
            draft: RatingDraft::new(),
        }
    }

    // ===== Callbacks =====

    pub fn on_query_change(&mut self, query: &str) {
        self.search.search(query);
    }

    /// Open `id`, or close it if it is already open.
    pub fn on_select(&mut self, id: &str) {
        self.draft.reset();
        match self.selection.select(id) {
            Selection::Open(open) => {
                let open = open.clone();
                self.detail.fetch(&open);
            }
            Selection::Closed => self.detail.clear(),
        }
    }

    pub fn on_close(&mut self) {
        self.draft.reset();
        if self.selection.close() {
            self.detail.clear();
        }
    }

    /// Rate the open movie.
    pub fn on_rate(&mut self, rating: u8) {
        if self.selection.current().is_open() {
            self.draft.set(rating);
        }
    }

    /// Add the open movie with the drafted rating, then close it.
    /// Returns whether the watched list changed.
    pub fn on_add_watched(&mut self) -> bool {
        let state = self.detail.state();
        let Some(detail) = state.detail() else {
            return false;
        };
        if self.watched.contains(&detail.id) {
            return false;
        }
        let Some(entry) = self.draft.commit(detail) else {
            return false;
        };

        let added = self.watched.add(entry);
        self.on_close();
        added
    }

    pub fn on_remove_watched(&mut self, id: &str) -> bool {
        self.watched.remove(id)
    }

    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::Escape => self.on_close(),
            Key::Enter => self.on_query_change(""),
        }
    }

    // ===== Views =====

    pub fn search_view(&self) -> SearchState {
        self.search.state()
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn selection(&self) -> &Selection {
        self.selection.current()
    }

    pub fn detail_view(&self) -> DetailState {
        self.detail.state()
    }

    pub fn rating_draft(&self) -> &RatingDraft {
        &self.draft
    }

    pub fn watched(&self) -> &[WatchedEntry] {
        self.watched.entries()
    }

    pub fn summary(&self) -> WatchedSummary {
        self.watched.summary()
    }

    /// The user's rating for `id`, if it is on the watched list.
    pub fn watched_rating(&self, id: &str) -> Option<f32> {
        self.watched.get(id).map(|e| e.user_rating)
    }

    /// Window title for the current view.
    pub fn window_title(&self) -> String {
        match &self.detail.state().status {
            DetailStatus::Ready(detail) if !detail.title.is_empty() => {
                format!("{} | {}", detail.title, APP_TITLE)
            }
            _ => APP_TITLE.to_string(),
        }
    }

    pub fn subscribe_search(&self) -> watch::Receiver<SearchState> {
        self.search.subscribe()
    }

    pub fn subscribe_detail(&self) -> watch::Receiver<DetailState> {
        self.detail.subscribe()
    }

    /// Wait for the current search to settle.
    pub async fn search_settled(&self) -> SearchState {
        self.search.settled().await
    }

    /// Wait for the current detail fetch to settle.
    pub async fn detail_settled(&self) -> DetailState {
        self.detail.settled().await
    }
}
