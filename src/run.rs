//! Application run modes: logger init, headless commands, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::{Args, Commands};
use crate::core;
use crate::core::cli::CliError;
use crate::core::config::Config;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui()
        && let Some(path) = core::paths::log_file()
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        logger.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = logger.try_init();
}

/// Run a subcommand that does not need the terminal UI.
pub fn run_command(command: Commands) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Variants { json } => core::cli::run_variants(&mut out, json),
        Commands::Convert {
            variants,
            file,
            text,
        } => {
            let input = core::cli::read_input(text.as_deref(), file.as_deref())?;
            core::cli::run_convert(&mut out, &input, &variants)
        }
        Commands::Escape { text } => core::cli::run_escape(&mut out, &text),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Args::command();
            crate::cli::generate(shell, &mut cmd, core::app::NAME, &mut out);
            Ok(())
        }
    }
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                log::error!("TUI panic: {}", msg);
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
