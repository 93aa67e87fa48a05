//! Terminal front end for the movie search pipeline.
//!
//! Stands in for the browser presentation layer: drives the controller
//! either one-shot (`search`) or as a line-driven interactive session
//! (`interactive`), and renders the result list and the error banner.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use controller::SearchController;
use omdb_client::{MovieClient, DEFAULT_API_KEY, DEFAULT_ENDPOINT};

/// Movie Search - debounced OMDb lookups from the terminal
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "Search the OMDb movie database", long_about = None)]
struct Cli {
    /// Provider endpoint to query
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// OMDb API key
    #[arg(long, default_value = DEFAULT_API_KEY)]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search and print the results
    Search {
        /// Movie title to search for
        #[arg(long)]
        query: String,

        /// Sort the results alphabetically by title
        #[arg(long)]
        sort: bool,
    },

    /// Interactive session: type to search, /search, /sort, /quit
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = MovieClient::with_endpoint(cli.endpoint, cli.api_key);

    match cli.command {
        Commands::Search { query, sort } => handle_search(client, query, sort).await,
        Commands::Interactive => handle_interactive(client).await,
    }
}

/// Handle the 'search' command
async fn handle_search(client: MovieClient, query: String, sort: bool) -> Result<()> {
    let mut controller = SearchController::new(client);
    if sort {
        controller.toggle_sort();
    }

    controller.on_text_change(&query);
    controller.submit().await;

    render(&controller);
    Ok(())
}

/// Handle the 'interactive' command
async fn handle_interactive(client: MovieClient) -> Result<()> {
    let mut controller = SearchController::new(client);

    println!("{}", "Movie search".bold());
    println!("Type a title to search (debounced). Commands: /search, /sort, /quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim_end_matches(['\r', '\n']);

        match input {
            "/quit" => break,
            "/sort" => {
                controller.toggle_sort();
                println!(
                    "Sort by title: {}",
                    if controller.sort_enabled() { "on" } else { "off" }
                );
                render(&controller);
            }
            "/search" => {
                println!("{}", "searching...".dimmed());
                controller.submit().await;
                render(&controller);
            }
            _ => {
                controller.on_text_change(input);
                if let Some(error) = controller.validation_error() {
                    println!("{} {}", "!".red(), error);
                }
                println!("{}", "searching...".dimmed());
                drive_debounce(&mut controller).await;
                render(&controller);
            }
        }
    }

    Ok(())
}

/// Tick the controller until the scheduled debounced search has fired.
async fn drive_debounce(controller: &mut SearchController) {
    while controller.has_pending_search() {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if controller.tick().await {
            break;
        }
    }
}

/// Print the error banner and the visible (possibly sorted) result list.
fn render(controller: &SearchController) {
    if let Some(message) = controller.error_message() {
        println!("{} {}", "error:".red(), message);
    }

    let movies = controller.visible_movies();
    if movies.is_empty() {
        if controller.error_message().is_none() {
            println!("No results.");
        }
        return;
    }

    for (i, movie) in movies.iter().enumerate() {
        println!("{}. {} ({})", i + 1, movie.title.bold(), movie.year);
        println!("   {}", movie.poster_url.dimmed());
    }
}
