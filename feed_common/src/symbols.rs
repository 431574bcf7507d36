//! Exchange-qualified instrument codes and parsing helpers.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::FeedError;

/// Default watchlist polled when no symbols file is supplied.
pub const DEFAULT_WATCHLIST: &[&str] = &[
    "000768.SZ",
    "600089.SH",
    "002832.SZ",
    "000983.SZ",
    "000729.SZ",
    "600026.SH",
    "002737.SZ",
    "600332.SH",
    "603027.SH",
    "600150.SH",
    "600312.SH",
];

/// Exchange-qualified instrument identifier, e.g. `600000.SH`.
///
/// The code and the exchange suffix are separated by exactly one dot and both
/// parts must be non-empty; the value is otherwise carried verbatim.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Symbol(String);

impl Symbol {
    /// The symbol as the provider expects it, e.g. in a `ts_code` parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses a comma-separated symbol list, e.g. `000625.SZ,600000.SH`.
    ///
    /// Whitespace around entries is ignored and empty entries are skipped.
    /// Returns an error if the list contains no symbols at all.
    pub fn parse_list(raw: &str) -> Result<Vec<Symbol>, FeedError> {
        let mut symbols = Vec::new();
        for entry in raw.split(',') {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            symbols.push(trimmed.parse::<Symbol>()?);
        }
        if symbols.is_empty() {
            return Err(FeedError::ParseSymbols(format!(
                "no symbols in list: {:?}",
                raw
            )));
        }
        Ok(symbols)
    }

    /// Builds the default watchlist.
    pub fn default_watchlist() -> Vec<Symbol> {
        DEFAULT_WATCHLIST
            .iter()
            .map(|s| Symbol(s.to_string()))
            .collect()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('.') {
            Some((code, exchange))
                if !code.is_empty() && !exchange.is_empty() && !exchange.contains('.') =>
            {
                Ok(Symbol(trimmed.to_string()))
            }
            _ => Err(FeedError::ParseSymbols(format!(
                "expected CODE.EXCHANGE, got {:?}",
                s
            ))),
        }
    }
}

/// Trait providing file parsing for symbols.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Symbols may be separated by commas, spaces, or new lines. Returns an
    /// error if any entry cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Symbol>, FeedError>;
}

impl SymbolParser for Symbol {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FeedError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(FeedError::Io)?;
            for entry in line.split(|c: char| c == ',' || c.is_whitespace()) {
                let trimmed = entry.trim();
                if trimmed.is_empty() {
                    continue;
                }
                symbols.push(trimmed.parse::<Self>()?);
            }
        }
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_exchange_qualified_code() {
        let symbol: Symbol = "600000.SH".parse().unwrap();
        assert_eq!(symbol.as_str(), "600000.SH");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let symbol: Symbol = "  000625.SZ ".parse().unwrap();
        assert_eq!(symbol.as_str(), "000625.SZ");
    }

    #[test]
    fn rejects_unqualified_code() {
        assert!("600000".parse::<Symbol>().is_err());
        assert!(".SH".parse::<Symbol>().is_err());
        assert!("600000.".parse::<Symbol>().is_err());
        assert!("600000.SH.X".parse::<Symbol>().is_err());
    }

    #[test]
    fn parses_comma_separated_list() {
        let symbols = Symbol::parse_list("000625.SZ, 600000.SH,").unwrap();
        let codes: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(codes, vec!["000625.SZ", "600000.SH"]);
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(Symbol::parse_list(" , ").is_err());
    }

    #[test]
    fn parses_file_with_mixed_separators() {
        let input = Cursor::new("000625.SZ,600000.SH\n\n  600026.SH\n");
        let symbols = Symbol::parse_from_file(input).unwrap();
        let codes: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(codes, vec!["000625.SZ", "600000.SH", "600026.SH"]);
    }

    #[test]
    fn file_with_bad_entry_is_an_error() {
        let input = Cursor::new("000625.SZ\nnot-a-symbol\n");
        assert!(Symbol::parse_from_file(input).is_err());
    }
}
