//! Interactive session over the app shell.
//!
//! A plain line is a new query. Lines starting with `:` are commands.
//! Search and detail states are printed as they change, so a slow response
//! for an old query never shows up once a newer query has been typed.

use super::{connect, open_store};
use crate::cli::output;
use crate::core::detail::{DetailState, DetailStatus};
use crate::core::search::{SearchState, SearchStatus};
use crate::core::shell::{AppShell, Key};
use crate::models::config::Config;
use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Open(String),
    Close,
    Rate(u8),
    Add,
    Remove(String),
    Watched,
    Clear,
    Help,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let Some(command) = line.strip_prefix(':') else {
        return Input::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("open" | "o", Some(target)) => Input::Open(target.to_string()),
        ("close" | "c", None) => Input::Close,
        ("rate" | "r", Some(n)) => match n.parse() {
            Ok(rating) if (1..=10).contains(&rating) => Input::Rate(rating),
            _ => Input::Invalid(format!("rating must be 1-10, got {}", n)),
        },
        ("add" | "a", None) => Input::Add,
        ("rm" | "remove", Some(id)) => Input::Remove(id.to_string()),
        ("watched" | "w", None) => Input::Watched,
        ("clear", None) => Input::Clear,
        ("help" | "h" | "?", None) => Input::Help,
        ("quit" | "q" | "exit", None) => Input::Quit,
        _ => Input::Invalid(format!("unknown command :{}", command)),
    }
}

/// Resolve `:open` targets: a 1-based result number or an identifier.
fn resolve_target(app: &AppShell, target: &str) -> Option<String> {
    match target.parse::<usize>() {
        Ok(n) => app
            .search_view()
            .results
            .get(n.checked_sub(1)?)
            .map(|m| m.id.clone()),
        Err(_) => Some(target.to_string()),
    }
}

fn print_help() {
    println!("{}", "Type to search. Commands:".bold());
    println!("  :open <n|id>   open a result (again to close)");
    println!("  :close         close the open movie");
    println!("  :rate <1-10>   rate the open movie");
    println!("  :add           add the open movie to your watched list");
    println!("  :rm <id>       remove a movie from your watched list");
    println!("  :watched       show your watched list");
    println!("  :clear         clear the search");
    println!("  :quit          leave");
}

fn render_watched(app: &AppShell) {
    output::print_summary(&app.summary());
    output::print_watched_table(app.watched());
}

fn render_search(app: &AppShell, state: &SearchState) {
    if state.status == SearchStatus::Idle {
        return;
    }
    output::print_search_state(state, |id| app.watched_rating(id));
}

fn render_detail(app: &AppShell, state: &DetailState) {
    match &state.status {
        DetailStatus::Idle => render_watched(app),
        DetailStatus::Loading => println!("{}", "Loading...".dimmed()),
        DetailStatus::Ready(detail) => {
            println!("{}", app.window_title().dimmed());
            output::print_detail(detail, app.watched_rating(&detail.id));
            if app.watched_rating(&detail.id).is_none() {
                println!();
                println!("{}", "Rate with :rate <1-10>, then :add".dimmed());
            }
        }
        DetailStatus::Unavailable(message) => {
            println!("{} {}", "No details available:".yellow(), message)
        }
        DetailStatus::Failed(message) => println!("{} {}", "❌".red(), message),
    }
}

/// Apply one input line. Returns false to quit.
fn handle_input(app: &mut AppShell, input: Input) -> bool {
    match input {
        Input::Query(query) => app.on_query_change(&query),
        Input::Open(target) => match resolve_target(app, &target) {
            Some(id) => app.on_select(&id),
            None => println!("{}", format!("No result #{}", target).yellow()),
        },
        Input::Close => app.on_key(Key::Escape),
        Input::Rate(rating) => {
            if app.selection().is_open() {
                app.on_rate(rating);
                println!("Rating: {} ★", rating);
            } else {
                println!("{}", "Open a movie first".yellow());
            }
        }
        Input::Add => {
            if app.rating_draft().rating().is_none() {
                println!("{}", "Rate the movie first".yellow());
            } else if !app.on_add_watched() {
                println!("{}", "Nothing added".yellow());
            }
        }
        Input::Remove(id) => {
            if app.on_remove_watched(&id) {
                render_watched(app);
            } else {
                println!("{}", format!("{} is not on your watched list", id).yellow());
            }
        }
        Input::Watched => render_watched(app),
        Input::Clear => app.on_key(Key::Enter),
        Input::Help => print_help(),
        Input::Quit => return false,
        Input::Invalid(message) => println!("{}", message.yellow()),
    }
    true
}

/// Run the interactive session until EOF or `:quit`.
pub async fn run_interactive(config: &Config) -> Result<()> {
    let mut app = AppShell::new(connect(config)?, open_store(config), &config.search);
    let mut search_rx = app.subscribe_search();
    let mut detail_rx = app.subscribe_detail();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "🍿 Popcorn".bold().cyan());
    print_help();
    println!();
    render_watched(&app);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !handle_input(&mut app, parse_input(line.trim_end())) {
                    break;
                }
            }
            Ok(()) = search_rx.changed() => {
                let state = search_rx.borrow_and_update().clone();
                render_search(&app, &state);
            }
            Ok(()) = detail_rx.changed() => {
                let state = detail_rx.borrow_and_update().clone();
                render_detail(&app, &state);
            }
        }
    }

    Ok(())
}
