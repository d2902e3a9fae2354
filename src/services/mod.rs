//! External service clients.

pub mod omdb;

use crate::models::{Movie, MovieDetail};
use crate::Result;
use async_trait::async_trait;

/// Movie metadata catalog.
///
/// The controllers only talk to the catalog through this trait. Dropping a
/// returned future must abort the underlying request.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Search by free text. `Error::NotFound` when the catalog has no match.
    async fn search(&self, query: &str) -> Result<Vec<Movie>>;

    /// Look up a single movie by identifier.
    async fn details(&self, id: &str) -> Result<MovieDetail>;
}
