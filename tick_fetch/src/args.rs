//! Command-line arguments for the tick fetcher.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Comma-separated symbol list, e.g. `000625.SZ,600000.SH`.
    pub symbols: String,

    /// How rows are written to each per-symbol tick file.
    #[clap(long, value_enum, default_value = "append")]
    pub write_mode: WriteMode,

    /// Also aggregate each symbol's tick file into per-minute statistics
    /// written to `<symbol>_minute.txt`.
    #[clap(long)]
    pub aggregate: bool,

    /// Directory where per-symbol files are written.
    #[clap(long, default_value = ".")]
    pub out_dir: String,
}

/// Write strategy for a symbol's tick file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum WriteMode {
    /// Append each row as it is processed; a repeated run appends the tape
    /// again after the existing rows.
    Append,
    /// Buffer the whole tape in memory and replace the file in one write.
    Buffered,
}
