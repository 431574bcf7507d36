//!
//! Common types and utilities shared by the quote poller and the tick fetcher.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` used across the workspace.
//! - `result` — handy `Result<T, FeedError>` alias.
//! - `symbols` — exchange-qualified instrument codes and parsing helpers.
//! - `side` — trade aggressor side and provider-label normalization.
//! - `api` — wire types for the market-data provider's HTTP endpoint.
//! - `provider` — the `MarketDataProvider` seam and its HTTP implementation.
//! - `records` — quote/tick rows and their CSV renderings.
//! - `sink` — per-symbol CSV files with lazily written headers.
#![warn(missing_docs)]
pub mod api;
pub mod error;
pub mod provider;
pub mod records;
pub mod result;
pub mod side;
pub mod sink;
pub mod symbols;

pub use error::FeedError;
pub use result::Result;
pub use symbols::Symbol;
