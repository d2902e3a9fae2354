//! Data models.

pub mod config;
pub mod movie;
pub mod watched;

pub use movie::{Movie, MovieDetail, SourceRating};
pub use watched::{WatchedEntry, WatchedSummary};
