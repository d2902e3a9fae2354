//! Terminal rendering shared by the commands.

use crate::core::search::{SearchState, SearchStatus};
use crate::models::{Movie, MovieDetail, WatchedEntry, WatchedSummary};
use colored::Colorize;

/// Shorten a title to fit a table column.
fn fit(title: &str, width: usize) -> String {
    if title.chars().count() > width {
        format!("{}...", title.chars().take(width - 3).collect::<String>())
    } else {
        title.to_string()
    }
}

/// Print search results as a numbered table. `rated` looks up the user's
/// rating for movies already on the watched list.
pub fn print_results_table(results: &[Movie], rated: impl Fn(&str) -> Option<f32>) {
    println!(
        "{}",
        format!("Found {} results", results.len()).bold().cyan()
    );
    println!();
    println!(
        " {:>3} | {:<11} | {:<9} | {:<40} | {}",
        "#", "ID", "Year", "Title", "Rated"
    );
    println!("{}", "-".repeat(80));

    for (i, movie) in results.iter().enumerate() {
        let rated = rated(&movie.id)
            .map(|r| format!("{} ★", r).green().to_string())
            .unwrap_or_default();
        println!(
            " {:>3} | {:<11} | {:<9} | {:<40} | {}",
            i + 1,
            movie.id,
            movie.year,
            fit(&movie.title, 40),
            rated
        );
    }
}

/// Print search results one per line.
pub fn print_results_simple(results: &[Movie]) {
    for movie in results {
        println!("{}\t{}\t{}", movie.id, movie.year, movie.title);
    }
}

/// Print a settled search state.
pub fn print_search_state(state: &SearchState, rated: impl Fn(&str) -> Option<f32>) {
    match state.status {
        SearchStatus::Idle => {}
        SearchStatus::Loading => println!("{}", "Searching...".dimmed()),
        SearchStatus::Ready => print_results_table(&state.results, rated),
        SearchStatus::Error => println!(
            "{} {}",
            "❌".red(),
            state.error_message.as_deref().unwrap_or("Search failed")
        ),
    }
}

/// Print one movie's details.
pub fn print_detail(detail: &MovieDetail, watched_rating: Option<f32>) {
    println!("{}", format!("{} ({})", detail.title, detail.year).bold().cyan());
    println!("{}", "=".repeat(60));
    println!(
        "  {} • {} min",
        detail.released.as_deref().unwrap_or("Unknown release"),
        detail.runtime
    );
    if let Some(genre) = &detail.genre {
        println!("  {}", genre);
    }
    println!("  ⭐️ {} IMDb rating", detail.imdb_rating);
    for rating in &detail.ratings {
        println!("     {}: {}", rating.source, rating.value);
    }
    println!();

    match watched_rating {
        Some(rating) => println!("  You rated this movie {} stars ⭐️", rating),
        None => println!("  {}", "Not on your watched list".dimmed()),
    }
    println!();

    if let Some(plot) = &detail.plot {
        println!("  Synopsis: {}", plot.italic());
    }
    if let Some(actors) = &detail.actors {
        println!("  Starring: {}", actors);
    }
    if let Some(director) = &detail.director {
        println!("  Director: {}", director);
    }
    if let Some(awards) = &detail.awards {
        println!("  Awards: {}", awards);
    }
    if let Some(box_office) = &detail.box_office {
        println!("  Box office: {}", box_office);
    }
}

/// Print the watched summary block.
pub fn print_summary(summary: &WatchedSummary) {
    println!("{}", "Movies you watched".bold());
    println!(
        "  #️⃣ {} movies  ⭐️ {:.1}  🌟 {:.1}  ⏳ {:.0} min",
        summary.count, summary.avg_imdb_rating, summary.avg_user_rating, summary.avg_runtime
    );
}

/// Print the watched list as a table.
pub fn print_watched_table(entries: &[WatchedEntry]) {
    if entries.is_empty() {
        println!("{}", "Your watched list is empty.".yellow());
        return;
    }

    println!(
        " {:>3} | {:<11} | {:<40} | {:>5} | {:>4} | {:>7}",
        "#", "ID", "Title", "IMDb", "You", "Runtime"
    );
    println!("{}", "-".repeat(86));
    for (i, entry) in entries.iter().enumerate() {
        println!(
            " {:>3} | {:<11} | {:<40} | {:>5.1} | {:>4} | {:>3} min",
            i + 1,
            entry.id(),
            fit(&entry.detail.title, 40),
            entry.detail.imdb_rating,
            entry.user_rating,
            entry.detail.runtime
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_truncates_long_titles() {
        assert_eq!(fit("Short", 10), "Short");
        assert_eq!(fit("A very long movie title", 10), "A very ...");
        assert_eq!(fit("Amélie Amélie Amélie", 10).chars().count(), 10);
    }
}
