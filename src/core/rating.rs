//! User rating in progress for the open movie.

use crate::models::{MovieDetail, WatchedEntry};

/// Highest rating a user can give.
pub const MAX_RATING: u8 = 10;

/// Rating being chosen before the movie is added to the watched list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingDraft {
    rating: u8,
    changes: u32,
}

impl RatingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rating (clamped to `1..=MAX_RATING`; 0 is ignored).
    /// Each change to a different value is counted.
    pub fn set(&mut self, rating: u8) {
        if rating == 0 {
            return;
        }
        let rating = rating.min(MAX_RATING);
        if rating != self.rating {
            self.rating = rating;
            self.changes += 1;
        }
    }

    /// Chosen rating, if any.
    pub fn rating(&self) -> Option<u8> {
        (self.rating > 0).then_some(self.rating)
    }

    /// How many times the rating changed.
    pub fn changes(&self) -> u32 {
        self.changes
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the watched entry for `detail`, if a rating was chosen and the
    /// detail has a title and poster.
    pub fn commit(&self, detail: &MovieDetail) -> Option<WatchedEntry> {
        let rating = self.rating()?;
        if detail.title.is_empty() || detail.poster.is_empty() {
            return None;
        }
        Some(WatchedEntry {
            detail: detail.clone(),
            user_rating: rating as f32,
            count_rating_decision: self.changes,
        })
    }
}
