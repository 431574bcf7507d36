//! Per-symbol tick-tape fetch and write.
//!
//! The fetcher pulls one symbol's full tape from the provider and writes
//! `<symbol>_tick.txt` under the sink's directory. Both write modes emit the
//! provider's time string verbatim, so they produce identical row content and
//! differ only in write strategy.
use feed_common::provider::MarketDataProvider;
use feed_common::records::{TICK_HEADER, TickRecord};
use feed_common::sink::{CsvSink, tick_file_name};
use feed_common::{Result, Symbol};
use log::info;

use crate::args::WriteMode;

/// One-shot tick-tape fetcher.
pub struct TickFetcher<P> {
    provider: P,
    sink: CsvSink,
    mode: WriteMode,
}

impl<P: MarketDataProvider> TickFetcher<P> {
    /// Creates a fetcher writing through `sink` with the given mode.
    pub fn new(provider: P, sink: CsvSink, mode: WriteMode) -> Self {
        TickFetcher {
            provider,
            sink,
            mode,
        }
    }

    /// Fetches and writes the full tape for one symbol.
    ///
    /// Returns the number of rows written. There is no dedup for ticks: in
    /// append mode a repeated invocation appends the tape again.
    pub fn fetch_symbol(&self, symbol: &Symbol) -> Result<usize> {
        let rows = self.provider.realtime_tick(symbol)?;
        let file_name = tick_file_name(symbol.as_str());

        match self.mode {
            WriteMode::Append => {
                for row in &rows {
                    let path = self.sink.append_line(&file_name, TICK_HEADER, &row.csv_line())?;
                    info!("Appended tick to {}", path.display());
                }
            }
            WriteMode::Buffered => {
                let lines: Vec<String> = rows.iter().map(TickRecord::csv_line).collect();
                let path = self.sink.overwrite(&file_name, TICK_HEADER, &lines)?;
                info!("Wrote {} ticks to {}", lines.len(), path.display());
            }
        }
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_common::records::QuoteRecord;
    use feed_common::side::TradeSide;
    use std::fs;

    /// Provider returning a fixed tape for every symbol.
    struct FakeProvider {
        tape: Vec<TickRecord>,
    }

    impl MarketDataProvider for FakeProvider {
        fn realtime_quote(&self, _symbols: &[Symbol]) -> Result<Vec<QuoteRecord>> {
            Ok(Vec::new())
        }

        fn realtime_tick(&self, _symbol: &Symbol) -> Result<Vec<TickRecord>> {
            Ok(self.tape.clone())
        }
    }

    fn tick(time: &str, price: &str, volume: &str, side: TradeSide) -> TickRecord {
        TickRecord {
            time: time.to_string(),
            price: price.to_string(),
            volume: volume.to_string(),
            side,
        }
    }

    fn sample_tape() -> Vec<TickRecord> {
        vec![
            tick("09:30:01", "11.25", "120", TradeSide::Buy),
            tick("09:30:02", "11.24", "40", TradeSide::Sell),
            tick("09:30:03", "11.24", "7", TradeSide::Neutral),
        ]
    }

    const EXPECTED: &str = "时间,价格(元),成交量,成交类型(B买盘/S卖盘/中性盘N)\n\
                            09:30:01,11.25,120,B\n\
                            09:30:02,11.24,40,S\n\
                            09:30:03,11.24,7,N\n";

    #[test]
    fn append_mode_writes_header_then_rows() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TickFetcher::new(
            FakeProvider { tape: sample_tape() },
            CsvSink::new(dir.path()),
            WriteMode::Append,
        );

        let symbol: Symbol = "600000.SH".parse().unwrap();
        assert_eq!(fetcher.fetch_symbol(&symbol).unwrap(), 3);

        let content = fs::read_to_string(dir.path().join("600000.SH_tick.txt")).unwrap();
        assert_eq!(content, EXPECTED);
    }

    #[test]
    fn buffered_mode_produces_the_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TickFetcher::new(
            FakeProvider { tape: sample_tape() },
            CsvSink::new(dir.path()),
            WriteMode::Buffered,
        );

        let symbol: Symbol = "600000.SH".parse().unwrap();
        assert_eq!(fetcher.fetch_symbol(&symbol).unwrap(), 3);

        let content = fs::read_to_string(dir.path().join("600000.SH_tick.txt")).unwrap();
        assert_eq!(content, EXPECTED);
    }

    #[test]
    fn append_mode_duplicates_rows_on_a_second_run() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TickFetcher::new(
            FakeProvider { tape: sample_tape() },
            CsvSink::new(dir.path()),
            WriteMode::Append,
        );

        let symbol: Symbol = "600000.SH".parse().unwrap();
        fetcher.fetch_symbol(&symbol).unwrap();
        fetcher.fetch_symbol(&symbol).unwrap();

        let content = fs::read_to_string(dir.path().join("600000.SH_tick.txt")).unwrap();
        // One header, two copies of the tape.
        assert_eq!(content.lines().count(), 7);
    }

    #[test]
    fn buffered_mode_replaces_the_file_on_a_second_run() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TickFetcher::new(
            FakeProvider { tape: sample_tape() },
            CsvSink::new(dir.path()),
            WriteMode::Buffered,
        );

        let symbol: Symbol = "600000.SH".parse().unwrap();
        fetcher.fetch_symbol(&symbol).unwrap();
        fetcher.fetch_symbol(&symbol).unwrap();

        let content = fs::read_to_string(dir.path().join("600000.SH_tick.txt")).unwrap();
        assert_eq!(content, EXPECTED);
    }
}
