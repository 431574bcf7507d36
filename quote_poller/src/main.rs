//! Quote Poller — polls the market-data provider for a real-time quote
//! snapshot every minute and appends newly observed rows to per-symbol CSV
//! files. Rows already emitted in this run (same symbol and time) are
//! suppressed; a header is written the first time each file is created.
//!
//! Usage example (CLI):
//! ```bash
//! TUSHARE_TOKEN=... quote_poller --trading-hours --out-dir ./data
//! ```
//!
//! With no arguments the built-in watchlist is polled and files land in the
//! current directory. The process runs until Ctrl+C; the first fetch or I/O
//! error is logged and terminates it with status 1.
#![warn(missing_docs)]
mod args;
mod hours;
mod poller;

use std::fs::File;
use std::io::BufReader;
use std::process;

use clap::Parser;
use feed_common::provider::TusharePro;
use feed_common::sink::CsvSink;
use feed_common::symbols::SymbolParser;
use feed_common::{Result, Symbol};
use log::{error, info};

use crate::args::Args;
use crate::poller::Poller;

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("Operation failed: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let symbols = match &args.path {
        Some(path) => {
            let file = File::open(path)?;
            Symbol::parse_from_file(BufReader::new(file))?
        }
        None => Symbol::default_watchlist(),
    };
    info!("Symbols: {:?}", symbols);

    let provider = TusharePro::from_env()?;
    std::fs::create_dir_all(&args.out_dir)?;
    let sink = CsvSink::new(&args.out_dir);

    let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })
    .expect("Error setting Ctrl+C handler");

    info!("Poller is running. Press Ctrl+C to exit.");
    let mut poller = Poller::new(provider, symbols, sink, args.trading_hours);
    poller.run(&shutdown_rx)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
