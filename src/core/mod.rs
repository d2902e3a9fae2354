//! Core application logic.

pub mod detail;
pub mod query;
pub mod rating;
pub mod search;
pub mod selection;
pub mod shell;
pub mod supersede;
pub mod watched;

pub use detail::{fetch_detail, DetailState, DetailStatus, MovieDetailFetch};
pub use rating::RatingDraft;
pub use search::{MovieSearch, SearchState, SearchStatus};
pub use selection::{Selection, SelectionController};
pub use shell::{AppShell, Key};
pub use watched::WatchedListController;
