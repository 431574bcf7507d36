//! Error types shared between the poller and fetcher binaries.
//!
//! The `FeedError` enum unifies common failure cases for I/O, HTTP transport,
//! serialization, and provider-reported errors, allowing crates to propagate a
//! single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the poller and the fetcher.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a symbol list or symbols file.
    #[error("Parse symbols error: {0}")]
    ParseSymbols(String),

    /// HTTP transport failure while talking to the market-data provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Error reported by the provider itself in the response envelope.
    #[error("Provider error (code {code}): {msg}")]
    Provider {
        /// Non-zero status code from the response envelope.
        code: i64,
        /// Provider-supplied message, empty when the provider sent none.
        msg: String,
    },

    /// A column the caller asked for is absent from the response field list.
    #[error("Response is missing column: {0}")]
    MissingColumn(String),
}
