//! Popcorn CLI
//!
//! Search a movie database, inspect details, and keep a rated watched list.

use clap::Parser;
use popcorn::cli::{
    args::{Cli, Commands, WatchedAction},
    commands::{interactive, search, show, watched},
};
use popcorn::models::config::{load_config, Config};
use popcorn::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let mut config = load_config();
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    // Run the appropriate command
    match cli.command {
        Commands::Search { query, format } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            search::execute_search(&config, &query.join(" "), &format).await?;
        }

        Commands::Show { id, format } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            show::execute_show(&config, &id, &format).await?;
        }

        Commands::Watched { action } => match action {
            WatchedAction::List { format } => {
                watched::list(&config, &format)?;
            }
            WatchedAction::Summary => {
                watched::summary(&config)?;
            }
            WatchedAction::Add { id, rating } => {
                if !cli.skip_preflight {
                    run_preflight_checks(&config).await?;
                }
                watched::add(&config, &id, rating).await?;
            }
            WatchedAction::Remove { id } => {
                watched::remove(&config, &id)?;
            }
        },

        Commands::Interactive => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            interactive::run_interactive(&config).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("popcorn=debug")
    } else {
        EnvFilter::new("popcorn=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
