//! Tick Fetcher — one-shot download of the full tick tape for one or more
//! symbols, written to per-symbol CSV files. The provider's trade-type label
//! is normalized to a one-letter side code (`B`/`S`/`N`).
//!
//! Usage example (CLI):
//! ```bash
//! TUSHARE_TOKEN=... tick_fetch 000625.SZ,600000.SH --aggregate
//! ```
//!
//! The single positional argument is a comma-separated symbol list; a missing
//! argument prints usage and exits with status 1. The first fetch or I/O
//! error is logged and terminates the run with status 1.
#![warn(missing_docs)]
mod aggregate;
mod args;
mod fetcher;

use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use feed_common::Result;
use feed_common::provider::TusharePro;
use feed_common::sink::CsvSink;
use feed_common::symbols::Symbol;
use log::{error, info};

use crate::args::Args;
use crate::fetcher::TickFetcher;

fn main() {
    init_logger();
    let args = Args::try_parse().unwrap_or_else(|e| {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });
    if let Err(e) = run(args) {
        error!("Operation failed: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let symbols = Symbol::parse_list(&args.symbols)?;
    let provider = TusharePro::from_env()?;
    std::fs::create_dir_all(&args.out_dir)?;
    let sink = CsvSink::new(&args.out_dir);
    let fetcher = TickFetcher::new(provider, sink.clone(), args.write_mode);

    for symbol in &symbols {
        let written = fetcher.fetch_symbol(symbol)?;
        info!("Fetched {} ticks for {}", written, symbol);
        if args.aggregate {
            let path = aggregate::write_minute_file(&sink, symbol.as_str())?;
            info!("Wrote minute aggregate to {}", path.display());
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
