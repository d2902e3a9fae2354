//! Error types for popcorn.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for popcorn.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("OMDb API key not configured. Set OMDB_API_KEY environment variable")]
    ApiKeyMissing,

    #[error("OMDb API key invalid")]
    ApiKeyInvalid,

    // Upstream errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Transport(String),

    #[error("Unexpected response from movie API: {0}")]
    Decode(String),

    /// The request was superseded or aborted before it settled.
    #[error("Request cancelled")]
    Cancelled,

    // Storage errors
    #[error("Invalid storage key: {0}")]
    InvalidStoreKey(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error only reports that the request was superseded.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_upstream_message() {
        let err = Error::NotFound("Movie not found!".to_string());
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[test]
    fn test_is_cancelled() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::Transport("boom".into()).is_cancelled());
        assert!(!Error::other("x").is_cancelled());
    }
}
