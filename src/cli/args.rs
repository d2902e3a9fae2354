//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Popcorn - search movies and keep a rated watched list
#[derive(Parser, Debug)]
#[command(name = "popcorn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Directory holding the watched list (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the movie catalog
    Search {
        /// Search text
        #[arg(value_name = "QUERY", required = true, num_args = 1..)]
        query: Vec<String>,

        /// Output format: table, simple, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show details for one movie
    Show {
        /// Catalog identifier (e.g. tt0372784)
        #[arg(value_name = "ID")]
        id: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Manage the watched list
    Watched {
        #[command(subcommand)]
        action: WatchedAction,
    },

    /// Interactive session: type to search, open, rate and add movies
    Interactive,
}

#[derive(Subcommand, Debug)]
pub enum WatchedAction {
    /// List watched movies
    List {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show summary statistics
    Summary,

    /// Add a movie with your rating
    Add {
        /// Catalog identifier
        #[arg(value_name = "ID")]
        id: String,

        /// Your rating (1-10)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
        rating: u8,
    },

    /// Remove a movie
    Remove {
        /// Catalog identifier
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::parse_from(["popcorn", "search", "star", "wars"]);
        match cli.command {
            Commands::Search { query, format } => {
                assert_eq!(query.join(" "), "star wars");
                assert_eq!(format, "table");
            }
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_watched_add_rating_range() {
        let cli = Cli::parse_from(["popcorn", "watched", "add", "tt1", "--rating", "9"]);
        assert!(matches!(
            cli.command,
            Commands::Watched {
                action: WatchedAction::Add { rating: 9, .. }
            }
        ));

        let err = Cli::try_parse_from(["popcorn", "watched", "add", "tt1", "--rating", "11"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_global_data_dir() {
        let cli = Cli::parse_from(["popcorn", "watched", "list", "--data-dir", "/tmp/p"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/p")));
    }
}
