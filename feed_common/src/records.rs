//! Quote and tick rows and their CSV renderings.
//!
//! Time, price, and volume are carried verbatim as the provider's text so a
//! value never makes a lossy round trip through a float. Headers are written
//! in the provider's language, matching the established file format.
use crate::side::TradeSide;

/// Header line of a per-symbol quote file.
pub const QUOTE_HEADER: &str = "时间, 现价(元)";
/// Header line of a per-symbol tick file.
pub const TICK_HEADER: &str = "时间,价格(元),成交量,成交类型(B买盘/S卖盘/中性盘N)";

/// One observed quote: best price for a symbol at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Exchange-qualified symbol the quote belongs to.
    pub symbol: String,
    /// Provider time string, e.g. `09:30:01`.
    pub time: String,
    /// Provider price string.
    pub price: String,
}

impl QuoteRecord {
    /// Composite key suppressing duplicate emission of the same observation.
    pub fn dedup_key(&self) -> String {
        format!("{}{}", self.symbol, self.time)
    }

    /// CSV data line, `{time}, {price}`.
    pub fn csv_line(&self) -> String {
        format!("{}, {}", self.time, self.price)
    }
}

/// One executed trade report from the tick tape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickRecord {
    /// Provider time string, e.g. `09:30:01`.
    pub time: String,
    /// Provider price string.
    pub price: String,
    /// Provider volume string, in lots.
    pub volume: String,
    /// Normalized aggressor side.
    pub side: TradeSide,
}

impl TickRecord {
    /// CSV data line, `{time},{price},{volume},{side}`.
    pub fn csv_line(&self) -> String {
        format!("{},{},{},{}", self.time, self.price, self.volume, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_line_keeps_the_space_after_the_comma() {
        let record = QuoteRecord {
            symbol: "600000.SH".to_string(),
            time: "09:30:01".to_string(),
            price: "11.25".to_string(),
        };
        assert_eq!(record.csv_line(), "09:30:01, 11.25");
    }

    #[test]
    fn dedup_key_is_symbol_plus_time() {
        let record = QuoteRecord {
            symbol: "600000.SH".to_string(),
            time: "09:30:01".to_string(),
            price: "11.25".to_string(),
        };
        assert_eq!(record.dedup_key(), "600000.SH09:30:01");
    }

    #[test]
    fn tick_line_encodes_the_side_code() {
        let record = TickRecord {
            time: "09:30:01".to_string(),
            price: "11.25".to_string(),
            volume: "120".to_string(),
            side: TradeSide::Buy,
        };
        assert_eq!(record.csv_line(), "09:30:01,11.25,120,B");
    }
}
