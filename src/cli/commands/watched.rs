//! Watched list command implementations.

use super::{connect, open_store};
use crate::cli::output;
use crate::core::detail::fetch_detail;
use crate::core::rating::RatingDraft;
use crate::core::watched::WatchedListController;
use crate::models::config::Config;
use anyhow::{bail, Context, Result};
use colored::Colorize;

/// List watched movies.
pub fn list(config: &Config, format: &str) -> Result<()> {
    let watched = WatchedListController::new(open_store(config));

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(watched.entries())?);
    } else {
        output::print_watched_table(watched.entries());
    }
    Ok(())
}

/// Show summary statistics.
pub fn summary(config: &Config) -> Result<()> {
    let watched = WatchedListController::new(open_store(config));
    output::print_summary(&watched.summary());
    Ok(())
}

/// Fetch a movie and add it with the given rating.
pub async fn add(config: &Config, id: &str, rating: u8) -> Result<()> {
    let mut watched = WatchedListController::new(open_store(config));

    if let Some(existing) = watched.get(id) {
        println!(
            "{} is already on your list (rated {} stars)",
            existing.detail.title.bold(),
            existing.user_rating
        );
        return Ok(());
    }

    let api = connect(config)?;
    let detail = fetch_detail(api.as_ref(), id)
        .await
        .with_context(|| format!("Failed to fetch details for {}", id))?;

    let mut draft = RatingDraft::new();
    draft.set(rating);
    let Some(entry) = draft.commit(&detail) else {
        bail!("{} has no title or poster and cannot be added", id);
    };

    let title = entry.detail.title.clone();
    if watched.add(entry) {
        println!("{} {} ({} stars)", "Added".green(), title.bold(), rating);
    }
    output::print_summary(&watched.summary());
    Ok(())
}

/// Remove a movie.
pub fn remove(config: &Config, id: &str) -> Result<()> {
    let mut watched = WatchedListController::new(open_store(config));

    if watched.remove(id) {
        println!("{} {}", "Removed".green(), id);
    } else {
        println!("{}", format!("{} is not on your watched list", id).yellow());
    }
    output::print_summary(&watched.summary());
    Ok(())
}
