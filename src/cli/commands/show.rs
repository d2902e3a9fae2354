//! Show command implementation.

use super::{connect, open_store};
use crate::cli::output;
use crate::core::detail::fetch_detail;
use crate::core::watched::WatchedListController;
use crate::models::config::Config;
use crate::Error;
use anyhow::Result;
use colored::Colorize;

/// Execute show command.
pub async fn execute_show(config: &Config, id: &str, format: &str) -> Result<()> {
    let api = connect(config)?;

    let detail = match fetch_detail(api.as_ref(), id).await {
        Ok(detail) => detail,
        Err(Error::NotFound(message)) => {
            println!("{}", not_found(id, &message, format));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let watched = WatchedListController::new(open_store(config));
    output::print_detail(&detail, watched.get(id).map(|e| e.user_rating));
    Ok(())
}

/// Line printed when the catalog has no such title.
fn not_found(id: &str, message: &str, format: &str) -> String {
    if format == "json" {
        serde_json::json!({ "imdbID": id, "error": message }).to_string()
    } else {
        format!("{} {}", "No details available:".yellow(), message)
    }
}
