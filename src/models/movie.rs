//! Movie data models.
//!
//! Field names on the wire follow the format the watched list has always
//! been stored in (`imdbID`, `imdbRating`, ...), so older stored lists
//! keep loading.

use serde::{Deserialize, Serialize};

/// A search result: the minimal shape the catalog returns for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog identifier (e.g. "tt0372784").
    #[serde(rename = "imdbID")]
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year as reported by the catalog ("2005", "2011–2019").
    pub year: String,
    /// Poster URL.
    pub poster: String,
}

/// Per-source rating (e.g. Rotten Tomatoes "85%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full metadata for one movie, a snapshot of a single lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    /// Catalog identifier.
    #[serde(rename = "imdbID")]
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: String,
    /// Poster URL.
    pub poster: String,
    /// External rating (0-10), 0 when unknown.
    #[serde(default)]
    pub imdb_rating: f32,
    /// Runtime in minutes, 0 when unknown.
    #[serde(default)]
    pub runtime: u32,
    /// Plot synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    /// Release date (e.g. "15 Jun 2005").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    /// Main cast, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    /// Director(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Genre(s), comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    /// Ratings from other sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<SourceRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metascore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_votes: Option<String>,
    /// Catalog type ("movie", "series", "episode").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dvd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl MovieDetail {
    /// The search-result view of this detail.
    pub fn as_movie(&self) -> Movie {
        Movie {
            id: self.id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            poster: self.poster.clone(),
        }
    }
}
