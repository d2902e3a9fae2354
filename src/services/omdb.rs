//! OMDb API client.
//!
//! Payloads are decoded into loosely typed structs first and converted to
//! the domain models in a separate step, so a missing or oddly typed
//! field never reaches the rest of the crate.

use super::MovieApi;
use crate::models::config::OmdbConfig;
use crate::models::{Movie, MovieDetail, SourceRating};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;

const NOT_APPLICABLE: &str = "N/A";

/// Identifier used to probe the API key.
const PROBE_ID: &str = "tt0111161";

/// OMDb API client.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

/// Search response.
#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<SearchItem>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Search item.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
}

/// Single title lookup response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailPayload {
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    pub runtime: Option<String>,
    pub plot: Option<String>,
    pub released: Option<String>,
    pub actors: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub ratings: Option<Vec<SourceRating>>,
    pub metascore: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    pub box_office: Option<String>,
    pub production: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub response: String,
    pub error: Option<String>,
}

impl SearchPayload {
    /// Convert to search results, or `NotFound` when the catalog reports none.
    pub fn into_movies(self) -> Result<Vec<Movie>> {
        if self.response != "True" {
            return Err(Error::NotFound(
                self.error.unwrap_or_else(|| "No movies found.".to_string()),
            ));
        }

        let items = self.search.unwrap_or_default();
        if items.is_empty() {
            return Err(Error::NotFound("No movies found.".to_string()));
        }

        Ok(items
            .into_iter()
            .filter(|item| !item.imdb_id.is_empty())
            .map(|item| Movie {
                id: item.imdb_id,
                title: item.title,
                year: item.year,
                poster: item.poster,
            })
            .collect())
    }
}

impl DetailPayload {
    /// Validate and coerce into a `MovieDetail`.
    pub fn into_detail(self) -> Result<MovieDetail> {
        if self.response != "True" {
            return Err(Error::NotFound(
                self.error.unwrap_or_else(|| "Movie not found!".to_string()),
            ));
        }

        let id = self
            .imdb_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Decode("missing imdbID".to_string()))?;
        let title = self
            .title
            .ok_or_else(|| Error::Decode(format!("missing Title for {}", id)))?;

        Ok(MovieDetail {
            id,
            title,
            year: self.year.unwrap_or_default(),
            poster: self.poster.unwrap_or_default(),
            imdb_rating: parse_rating(self.imdb_rating.as_deref()),
            runtime: parse_runtime(self.runtime.as_deref()),
            plot: text(self.plot),
            released: text(self.released),
            actors: text(self.actors),
            director: text(self.director),
            genre: text(self.genre),
            language: text(self.language),
            country: text(self.country),
            awards: text(self.awards),
            ratings: self.ratings.unwrap_or_default(),
            metascore: text(self.metascore),
            imdb_votes: text(self.imdb_votes),
            kind: text(self.kind),
            dvd: text(self.dvd),
            box_office: text(self.box_office),
            production: text(self.production),
            website: text(self.website),
        })
    }
}

/// Parse a "<N> min" runtime. "N/A", missing, or no leading number gives 0.
pub fn parse_runtime(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    if raw.trim() == NOT_APPLICABLE {
        return 0;
    }

    if let Ok(re) = regex::Regex::new(r"^\s*(\d+)") {
        if let Some(caps) = re.captures(raw) {
            return caps[1].parse().unwrap_or(0);
        }
    }
    0
}

/// Parse an external rating. Anything unparseable gives 0.
pub fn parse_rating(raw: Option<&str>) -> f32 {
    raw.and_then(|r| r.trim().parse::<f32>().ok())
        .filter(|r| r.is_finite() && *r >= 0.0)
        .unwrap_or(0.0)
}

fn text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != NOT_APPLICABLE)
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::new();
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &OmdbConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(Error::ApiKeyMissing)?;
        Ok(Self::new(api_key, config.base_url.clone()))
    }

    /// Build URL with the api key and one lookup parameter.
    fn build_url(&self, param: &str, value: &str) -> String {
        format!(
            "{}/?apikey={}&{}={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            param,
            urlencoding::encode(value)
        )
    }

    /// Verify API key is valid.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = self.build_url("i", PROBE_ID);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Search for movies.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let url = self.build_url("s", query);
        tracing::debug!("Searching OMDb for {:?}", query);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Transport(format!(
                "Something went wrong with fetching the movies (HTTP {})",
                resp.status()
            )));
        }

        let payload: SearchPayload = resp.json().await?;
        payload.into_movies()
    }

    /// Get movie details by identifier.
    pub async fn get_movie_details(&self, id: &str) -> Result<MovieDetail> {
        let url = self.build_url("i", id);
        tracing::debug!("Fetching OMDb details for {}", id);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Transport(format!(
                "Something went wrong with fetching movie details (HTTP {})",
                resp.status()
            )));
        }

        let payload: DetailPayload = resp.json().await?;
        payload.into_detail()
    }
}

#[async_trait]
impl MovieApi for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        self.search_movies(query).await
    }

    async fn details(&self, id: &str) -> Result<MovieDetail> {
        self.get_movie_details(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runtime() {
        assert_eq!(parse_runtime(Some("142 min")), 142);
        assert_eq!(parse_runtime(Some("  90 min")), 90);
        assert_eq!(parse_runtime(Some("N/A")), 0);
        assert_eq!(parse_runtime(Some("unknown")), 0);
        assert_eq!(parse_runtime(Some("")), 0);
        assert_eq!(parse_runtime(None), 0);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some("8.2")), 8.2);
        assert_eq!(parse_rating(Some("N/A")), 0.0);
        assert_eq!(parse_rating(Some("NaN")), 0.0);
        assert_eq!(parse_rating(None), 0.0);
    }

    #[test]
    fn test_search_payload_with_results() {
        let json = r#"{
            "Search": [
                {"Title":"Batman Begins","Year":"2005","imdbID":"tt0372784","Type":"movie","Poster":"https://example.com/1.jpg"},
                {"Title":"The Batman","Year":"2022","imdbID":"tt1877830","Type":"movie","Poster":"N/A"}
            ],
            "totalResults":"2",
            "Response":"True"
        }"#;
        let payload: SearchPayload = serde_json::from_str(json).unwrap();
        let movies = payload.into_movies().unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, "tt0372784");
        assert_eq!(movies[1].poster, "N/A");
    }

    #[test]
    fn test_search_payload_no_results() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let payload: SearchPayload = serde_json::from_str(json).unwrap();
        match payload.into_movies() {
            Err(Error::NotFound(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_payload_runtime_not_applicable() {
        let json = r#"{
            "Title":"Some Short","Year":"1999","Runtime":"N/A","imdbRating":"N/A",
            "Plot":"N/A","imdbID":"tt0000001","Poster":"https://example.com/p.jpg",
            "Response":"True"
        }"#;
        let payload: DetailPayload = serde_json::from_str(json).unwrap();
        let detail = payload.into_detail().unwrap();

        assert_eq!(detail.runtime, 0);
        assert_eq!(detail.imdb_rating, 0.0);
        assert!(detail.plot.is_none());
    }

    #[test]
    fn test_detail_payload_full() {
        let json = r#"{
            "Title":"Batman Begins","Year":"2005","Rated":"PG-13","Released":"15 Jun 2005",
            "Runtime":"140 min","Genre":"Action, Drama","Director":"Christopher Nolan",
            "Actors":"Christian Bale, Michael Caine","Plot":"After witnessing...",
            "Language":"English","Country":"United States","Awards":"Nominated for 1 Oscar.",
            "Poster":"https://example.com/p.jpg",
            "Ratings":[{"Source":"Internet Movie Database","Value":"8.2/10"}],
            "Metascore":"70","imdbRating":"8.2","imdbVotes":"1,500,000","imdbID":"tt0372784",
            "Type":"movie","DVD":"N/A","BoxOffice":"$206,863,479","Production":"N/A",
            "Website":"N/A","Response":"True"
        }"#;
        let payload: DetailPayload = serde_json::from_str(json).unwrap();
        let detail = payload.into_detail().unwrap();

        assert_eq!(detail.id, "tt0372784");
        assert_eq!(detail.runtime, 140);
        assert!((detail.imdb_rating - 8.2).abs() < f32::EPSILON);
        assert_eq!(detail.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(detail.ratings.len(), 1);
        assert_eq!(detail.box_office.as_deref(), Some("$206,863,479"));
        assert!(detail.dvd.is_none());
        assert_eq!(detail.kind.as_deref(), Some("movie"));
    }

    #[test]
    fn test_detail_payload_not_found() {
        let json = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        let payload: DetailPayload = serde_json::from_str(json).unwrap();
        match payload.into_detail() {
            Err(Error::NotFound(msg)) => assert_eq!(msg, "Incorrect IMDb ID."),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_payload_missing_id_is_decode_error() {
        let json = r#"{"Title":"Nameless","Response":"True"}"#;
        let payload: DetailPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(payload.into_detail(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_build_url_encodes_query() {
        let client = OmdbClient::new("key", "https://www.omdbapi.com/");
        assert_eq!(
            client.build_url("s", "star wars"),
            "https://www.omdbapi.com/?apikey=key&s=star%20wars"
        );
    }
}
