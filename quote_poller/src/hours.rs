//! Trading-hours gate for the polling loop.
//!
//! The exchange trades in two intraday sessions; outside them a snapshot
//! would only repeat stale rows, so the gated poller skips the fetch
//! entirely. Windows are fixed and compared with minute granularity,
//! inclusive on both ends.
use chrono::{NaiveTime, Timelike};

/// Intraday fetch windows as minutes after midnight, local time.
const WINDOWS: [(u32, u32); 2] = [
    (9 * 60 + 30, 11 * 60 + 30),
    (12 * 60 + 59, 15 * 60),
];

/// Returns whether `now` falls inside one of the trading windows.
pub fn in_trading_window(now: NaiveTime) -> bool {
    let minute = now.hour() * 60 + now.minute();
    WINDOWS
        .iter()
        .any(|&(open, close)| minute >= open && minute <= close)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn rejects_before_the_open() {
        assert!(!in_trading_window(at(9, 29)));
    }

    #[test]
    fn accepts_the_morning_session() {
        assert!(in_trading_window(at(9, 30)));
        assert!(in_trading_window(at(10, 0)));
        assert!(in_trading_window(at(11, 30)));
    }

    #[test]
    fn rejects_the_lunch_break() {
        assert!(!in_trading_window(at(11, 31)));
        assert!(!in_trading_window(at(12, 58)));
    }

    #[test]
    fn accepts_the_afternoon_session() {
        assert!(in_trading_window(at(12, 59)));
        assert!(in_trading_window(at(13, 30)));
        assert!(in_trading_window(at(15, 0)));
    }

    #[test]
    fn rejects_after_the_close() {
        assert!(!in_trading_window(at(15, 1)));
        assert!(!in_trading_window(at(23, 59)));
    }
}
