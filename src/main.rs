mod cli_messages;
mod config;
mod consts;
mod controller;
mod error_classifier;
mod events;
mod logging;
mod provider;
mod quote;
mod session;
mod store;
mod ui;

use crate::controller::DashboardController;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Keep likes in memory only; nothing is read from or written to disk
        #[arg(long, default_value_t = false)]
        ephemeral: bool,
    },
    /// Fetch a single random quote and print it
    Quote {
        /// Like the fetched quote (or unlike it if it was already liked)
        #[arg(long)]
        like: bool,
    },
    /// List liked quotes
    Likes {
        /// Only show quotes whose text or author contains this, ignoring case
        #[arg(long, short, value_name = "TERM")]
        search: Option<String>,
    },
    /// Remove a liked quote by its exact text
    Unlike {
        /// The quote text, exactly as liked
        #[arg(value_name = "QUOTE")]
        quote: String,
    },
    /// Remove every liked quote
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            with_background,
            ephemeral,
        } => {
            let session = setup_session(ephemeral)?;
            run_tui_mode(session, with_background).await
        }
        Command::Quote { like } => {
            let session = setup_session(false)?;
            run_headless_mode(session, like).await
        }
        Command::Likes { search } => {
            let session = setup_session(false)?;
            list_likes(&session.controller, search.as_deref().unwrap_or(""));
            Ok(())
        }
        Command::Unlike { quote } => {
            let mut session = setup_session(false)?;
            if session.controller.remove_like(&quote) {
                print_cmd_success!(
                    "Removed from likes",
                    "{} liked quote(s) left",
                    session.controller.liked_quotes().len()
                );
            } else {
                print_cmd_warn!("Not liked", "No liked quote has the text \"{}\"", quote);
            }
            Ok(())
        }
        Command::Clear => {
            let mut session = setup_session(false)?;
            if let Some(dir) = &session.store_dir {
                print_cmd_info!("Clearing liked quotes", "in {}", dir.display());
            }
            let removed = session.controller.clear_likes();
            print_cmd_success!("Cleared", "Removed {} liked quote(s)", removed);
            Ok(())
        }
    }
}

/// Prints the liked quotes matching `term`, numbered in like order.
fn list_likes(controller: &DashboardController, term: &str) {
    let matches = controller.filtered_liked_quotes(term);
    if matches.is_empty() {
        println!("No matching quotes found.");
        return;
    }
    for (i, item) in matches.iter().enumerate() {
        println!("{}. \"{}\"", i + 1, item.quote);
        println!("   - {}", item.author);
    }
    println!(
        "\nTotal Liked: {} (showing {})",
        controller.liked_quotes().len(),
        matches.len()
    );
}
