//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  unispace                                      Launch interactive TUI
  unispace variants                             List the whitespace variants
  unispace convert -s \"Em Space\" \"hello world\"   Replace spaces with U+2003
  unispace convert -s \"Thin Space\" -s \"Hair Space\" < in.txt
  unispace escape \"a b\"                          Print \\u escapes
  unispace completions bash                     Generate bash completions

ENVIRONMENT:
  UNISPACE_THEME            light, dark or auto (default: auto)
  UNISPACE_COPY_CONFIRM_MS  How long \"Copied\" stays visible (default: 3000)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Re-render text with Unicode whitespace variants in place of ordinary spaces",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available whitespace variants
    Variants {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Replace every space in the input with the given variant(s)
    Convert {
        /// Variant label (repeat to combine, in order)
        #[arg(short = 's', long = "space", visible_alias = "variant", required = true)]
        variants: Vec<String>,
        /// Read the input from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Text to convert ('-' or omitted reads stdin)
        text: Option<String>,
    },
    /// Print the \uXXXX escape of each UTF-16 code unit
    Escape {
        text: String,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no subcommand was given, i.e. the TUI will own the terminal.
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}
