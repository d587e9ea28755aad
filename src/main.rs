//! # unispace - Unicode spacing playground
//!
//! Type text in a terminal UI and see it re-rendered with every ordinary space
//! replaced by a Unicode whitespace variant (em space, thin space, hair space,
//! zero-width space, word joiner, or a custom combination), then copy any
//! variant to the clipboard.
//!
//! ## Features
//! - Interactive TUI (default)
//! - Headless `variants`, `convert`, `escape` and `completions` subcommands
//! - Configuration via environment (optionally from `.env`)

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

/// Main application entry point
///
/// # Errors
/// Returns an error if a headless command fails or the TUI encounters an IO error
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    if let Some(command) = args.command {
        if let Err(e) = run::run_command(command) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::info!(
        "{} {} starting (theme override: {:?}, copy confirm: {:?})",
        core::app::NAME,
        core::app::VERSION,
        config.theme,
        config.copy_confirm
    );

    run::launch_tui(config).await
}
