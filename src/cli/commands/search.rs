//! Search command implementation.

use super::{connect, open_store};
use crate::cli::output;
use crate::core::search::{MovieSearch, SearchStatus};
use crate::core::watched::WatchedListController;
use crate::models::config::Config;
use anyhow::Result;
use colored::Colorize;

/// Execute search command.
pub async fn execute_search(config: &Config, query: &str, format: &str) -> Result<()> {
    let api = connect(config)?;
    let watched = WatchedListController::new(open_store(config));

    let mut search = MovieSearch::new(api, &config.search);
    search.search(query);
    let state = search.settled().await;

    if state.status == SearchStatus::Idle {
        println!(
            "{}",
            format!(
                "Type at least {} characters to search.",
                config.search.min_query_len
            )
            .yellow()
        );
        return Ok(());
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&state)?),
        "simple" => match state.status {
            SearchStatus::Ready => output::print_results_simple(&state.results),
            _ => output::print_search_state(&state, |_| None),
        },
        _ => output::print_search_state(&state, |id| watched.get(id).map(|e| e.user_rating)),
    }

    Ok(())
}
