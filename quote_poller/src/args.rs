//! Command-line arguments for the Quote Poller.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a text file with symbols to poll.
    /// Symbols may be separated by commas, spaces, or new lines.
    /// Omitting this polls the built-in watchlist.
    #[clap(long)]
    pub path: Option<String>,

    /// Directory where per-symbol quote files are written.
    #[clap(long, default_value = ".")]
    pub out_dir: String,

    /// Only fetch inside the fixed intraday trading windows
    /// (09:30-11:30 and 12:59-15:00 local time).
    #[clap(long)]
    pub trading_hours: bool,
}
