//! Per-minute aggregation of a symbol's tick file.
//!
//! Reads `<symbol>_tick.txt` back, buckets rows by minute (`09:30:17` falls
//! into `09:30:00`), and writes `<symbol>_minute.txt` with, per minute: the
//! last traded price, total volume, total traded value, and the buy-side and
//! sell-side volumes. Lines that do not parse as tick rows (such as the
//! header) are skipped.
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use feed_common::Result;
use feed_common::side::TradeSide;
use feed_common::sink::{CsvSink, minute_file_name, read_lines, tick_file_name};
use log::warn;

/// Header line of a per-symbol minute-aggregate file.
pub const MINUTE_HEADER: &str =
    "时间,现价(元),一分钟内总成交数(手),一分钟内总成交金额(元),一分钟内买盘成交数(手),一分钟内卖盘成交数(手)";

/// One lot is 100 shares; traded value is `price × volume × 100`.
const SHARES_PER_LOT: f64 = 100.0;

/// Aggregated statistics for one minute of the tape.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteStat {
    /// Minute bucket, `HH:MM:00`.
    pub time: String,
    /// Last traded price observed within the minute.
    pub price: f64,
    /// Total volume in lots.
    pub total_volume: u64,
    /// Total traded value in yuan.
    pub total_value: f64,
    /// Buy-side volume in lots.
    pub buy_volume: u64,
    /// Sell-side volume in lots.
    pub sell_volume: u64,
    /// Neutral volume in lots.
    pub neutral_volume: u64,
}

impl MinuteStat {
    fn new(time: String) -> Self {
        MinuteStat {
            time,
            price: 0.0,
            total_volume: 0,
            total_value: 0.0,
            buy_volume: 0,
            sell_volume: 0,
            neutral_volume: 0,
        }
    }

    /// CSV data line; the traded value is rounded to whole yuan.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.time,
            self.price,
            self.total_volume,
            self.total_value.round() as i64,
            self.buy_volume,
            self.sell_volume
        )
    }
}

/// Buckets tick lines into per-minute statistics, ordered by minute.
pub fn aggregate_lines<'a, I>(lines: I) -> Vec<MinuteStat>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats: BTreeMap<String, MinuteStat> = BTreeMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((time, price, volume, side)) = parse_tick_line(line) else {
            continue;
        };

        let key = minute_key(time);
        let entry = stats
            .entry(key.clone())
            .or_insert_with(|| MinuteStat::new(key));
        entry.total_volume += volume;
        entry.total_value += price * volume as f64 * SHARES_PER_LOT;
        entry.price = price;

        match TradeSide::from_str(side) {
            Ok(TradeSide::Buy) => entry.buy_volume += volume,
            Ok(TradeSide::Sell) => entry.sell_volume += volume,
            Ok(TradeSide::Neutral) => entry.neutral_volume += volume,
            Err(_) => warn!("Unknown trade side: {}", side),
        }
    }

    stats.into_values().collect()
}

/// Aggregates `<symbol>_tick.txt` and writes `<symbol>_minute.txt`.
///
/// Returns the path of the minute file.
pub fn write_minute_file(sink: &CsvSink, symbol: &str) -> Result<PathBuf> {
    let lines = read_lines(&sink.path_for(&tick_file_name(symbol)))?;
    let stats = aggregate_lines(lines.iter().map(String::as_str));
    let rows: Vec<String> = stats.iter().map(MinuteStat::csv_line).collect();
    sink.overwrite(&minute_file_name(symbol), MINUTE_HEADER, &rows)
}

/// Splits a tick line into `(time, price, volume, side)`.
///
/// Returns `None` when the line does not have four fields or the numeric
/// fields do not parse, which also filters the header out.
fn parse_tick_line(line: &str) -> Option<(&str, f64, u64, &str)> {
    let mut fields = line.splitn(4, ',');
    let time = fields.next()?;
    let price: f64 = fields.next()?.trim().parse().ok()?;
    let volume: u64 = fields.next()?.trim().parse().ok()?;
    let side = fields.next()?.trim();
    Some((time, price, volume, side))
}

/// Truncates a `HH:MM:SS` time to its minute bucket, `HH:MM:00`.
fn minute_key(time: &str) -> String {
    let mut parts = time.splitn(3, ':');
    match (parts.next(), parts.next()) {
        (Some(hour), Some(minute)) => format!("{}:{}:00", hour, minute),
        _ => time.to_string(),
    }
}
