//! Fake catalogs shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use popcorn::models::{Movie, MovieDetail, WatchedEntry};
use popcorn::services::MovieApi;
use popcorn::{Error, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        poster: format!("https://example.com/{}.jpg", id),
    }
}

pub fn detail(id: &str, title: &str, imdb_rating: f32, runtime: u32) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        poster: format!("https://example.com/{}.jpg", id),
        imdb_rating,
        runtime,
        ..Default::default()
    }
}

pub fn watched(id: &str, user_rating: f32) -> WatchedEntry {
    WatchedEntry {
        detail: detail(id, &format!("Movie {}", id), 7.0, 100),
        user_rating,
        count_rating_decision: 1,
    }
}

/// Wait (bounded) until `condition` holds, yielding to spawned tasks.
pub async fn eventually(condition: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + TIMEOUT;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    condition()
}

/// Catalog answering immediately from fixed tables.
#[derive(Default)]
pub struct StubApi {
    pub movies: HashMap<String, Vec<Movie>>,
    pub details: HashMap<String, MovieDetail>,
    search_calls: Mutex<Vec<String>>,
    detail_calls: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, movies: Vec<Movie>) -> Self {
        self.movies.insert(query.to_string(), movies);
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieApi for StubApi {
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        self.search_calls.lock().unwrap().push(query.to_string());
        self.movies
            .get(query)
            .cloned()
            .ok_or_else(|| Error::NotFound("Movie not found!".to_string()))
    }

    async fn details(&self, id: &str) -> Result<MovieDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Incorrect IMDb ID.".to_string()))
    }
}

/// Requests that stay pending until the test resolves them.
pub struct Gate<T> {
    pending: Mutex<HashMap<String, oneshot::Sender<Result<T>>>>,
    calls: Mutex<Vec<String>>,
    aborted: AtomicUsize,
}

impl<T> Default for Gate<T> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            aborted: AtomicUsize::new(0),
        }
    }
}

struct AbortGuard<'a> {
    aborted: &'a AtomicUsize,
    armed: bool,
}

impl Drop for AbortGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.aborted.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl<T> Gate<T> {
    async fn wait(&self, key: &str) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().insert(key.to_string(), tx);
        self.calls.lock().unwrap().push(key.to_string());

        let mut guard = AbortGuard {
            aborted: &self.aborted,
            armed: true,
        };
        let outcome = rx.await.unwrap_or(Err(Error::Cancelled));
        guard.armed = false;
        outcome
    }

    /// Whether a request for `key` is waiting.
    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.lock().unwrap().contains_key(key)
    }

    /// Complete the request for `key`. Returns whether its caller was still
    /// listening.
    pub async fn resolve(&self, key: &str, outcome: Result<T>) -> bool {
        assert!(
            eventually(|| self.is_pending(key)).await,
            "no pending request for {}",
            key
        );
        let tx = self.pending.lock().unwrap().remove(key);
        match tx {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests dropped before they were resolved.
    pub fn aborted(&self) -> usize {
        self.aborted.load(Ordering::SeqCst)
    }
}

/// Catalog whose requests are resolved by the test, in any order.
#[derive(Default)]
pub struct ScriptedApi {
    pub searches: Gate<Vec<Movie>>,
    pub details: Gate<MovieDetail>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieApi for ScriptedApi {
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        self.searches.wait(query).await
    }

    async fn details(&self, id: &str) -> Result<MovieDetail> {
        self.details.wait(id).await
    }
}
