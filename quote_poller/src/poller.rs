//! The polling loop: fetch a snapshot, suppress already-seen rows, append
//! the rest to per-symbol files.
//!
//! `Poller` owns all loop state: the provider, the symbol list, the output
//! sink, and the seen-key set. A fresh instance is a clean restart, and tests
//! can drive a bounded number of iterations through [`Poller::poll_once`]
//! without the sleep.
//!
//! The seen-key set lives for the process and is never pruned; memory grows
//! with the number of distinct (symbol, time) pairs observed. It is not
//! persisted: after a restart the next snapshot re-appends rows that are
//! already on disk.
use std::collections::HashSet;
use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use feed_common::provider::MarketDataProvider;
use feed_common::records::QUOTE_HEADER;
use feed_common::sink::{CsvSink, quote_file_name};
use feed_common::{Result, Symbol};
use log::info;

use crate::hours;

/// Fixed pause between polling iterations.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Owned state of the quote-polling loop.
pub struct Poller<P> {
    provider: P,
    symbols: Vec<Symbol>,
    sink: CsvSink,
    seen: HashSet<String>,
    gate_on_trading_hours: bool,
}

impl<P: MarketDataProvider> Poller<P> {
    /// Creates a poller over `symbols` writing through `sink`.
    pub fn new(provider: P, symbols: Vec<Symbol>, sink: CsvSink, gate_on_trading_hours: bool) -> Self {
        Poller {
            provider,
            symbols,
            sink,
            seen: HashSet::new(),
            gate_on_trading_hours,
        }
    }

    /// Runs one polling iteration and returns the number of rows appended.
    ///
    /// With the trading-hours gate enabled, an iteration outside the windows
    /// skips the fetch and appends nothing.
    pub fn poll_once(&mut self) -> Result<usize> {
        if self.gate_on_trading_hours && !hours::in_trading_window(Local::now().time()) {
            info!("Outside trading hours, skipping fetch");
            return Ok(0);
        }

        let rows = self.provider.realtime_quote(&self.symbols)?;
        let mut written = 0;
        for row in rows {
            if !self.seen.insert(row.dedup_key()) {
                continue;
            }
            let path =
                self.sink
                    .append_line(&quote_file_name(&row.symbol), QUOTE_HEADER, &row.csv_line())?;
            info!("Appended quote to {}", path.display());
            written += 1;
        }
        Ok(written)
    }

    /// Polls until the shutdown channel fires.
    ///
    /// The inter-iteration sleep is a `recv_timeout` on `shutdown`, so Ctrl+C
    /// interrupts a sleeping poller immediately. The first fetch or I/O error
    /// ends the loop.
    pub fn run(&mut self, shutdown: &Receiver<()>) -> Result<()> {
        loop {
            let written = self.poll_once()?;
            info!(
                "Iteration done, {} new rows. Waiting {}s before the next fetch...",
                written,
                POLL_INTERVAL.as_secs()
            );
            match shutdown.recv_timeout(POLL_INTERVAL) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
        info!("Poller stopping...");
        Ok(())
    }
}
