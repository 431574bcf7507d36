//! Market-data provider seam and its HTTP implementation.
//!
//! `MarketDataProvider` is the boundary the poller and fetcher program
//! against; `TusharePro` implements it over the provider's blocking HTTP
//! endpoint. Tests substitute an in-memory implementation, so nothing in the
//! workspace touches the network outside this type.
use std::env;

use log::debug;
use serde_json::json;

use crate::api::{self, ApiRequest, ApiResponse, ResultSet};
use crate::error::FeedError;
use crate::records::{QuoteRecord, TickRecord};
use crate::result::Result;
use crate::side::TradeSide;
use crate::symbols::Symbol;

/// Environment variable holding the provider account token.
pub const TOKEN_ENV: &str = "TUSHARE_TOKEN";

/// External collaborator supplying quote snapshots and tick tapes.
pub trait MarketDataProvider {
    /// Fetches the current quote snapshot for the given symbols.
    fn realtime_quote(&self, symbols: &[Symbol]) -> Result<Vec<QuoteRecord>>;

    /// Fetches the full tick tape for one symbol.
    fn realtime_tick(&self, symbol: &Symbol) -> Result<Vec<TickRecord>>;
}

/// Blocking HTTP client for the provider endpoint.
///
/// No request timeout is configured: a hung provider call blocks the process,
/// the same way the polling loop itself does.
pub struct TusharePro {
    client: reqwest::blocking::Client,
    token: String,
    url: String,
}

impl TusharePro {
    /// Creates a client for the production endpoint with the given token.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_url(token, api::API_URL)
    }

    /// Creates a client posting to a non-default endpoint URL.
    pub fn with_url(token: &str, url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()?;
        Ok(TusharePro {
            client,
            token: String::from(token),
            url: String::from(url),
        })
    }

    /// Creates a client with the token taken from the `TUSHARE_TOKEN`
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV)
            .map_err(|_| FeedError::Format(format!("{} is not set", TOKEN_ENV)))?;
        Self::new(&token)
    }

    fn call(&self, request: &ApiRequest) -> Result<ResultSet> {
        debug!("POST {} api_name={}", self.url, request.api_name);
        let body = self.client.post(&self.url).json(request).send()?.text()?;
        let response: ApiResponse = serde_json::from_str(&body)?;
        response.into_result_set()
    }
}

impl MarketDataProvider for TusharePro {
    fn realtime_quote(&self, symbols: &[Symbol]) -> Result<Vec<QuoteRecord>> {
        let ts_code = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let request = ApiRequest::new(
            api::REALTIME_QUOTE,
            &self.token,
            json!({ "ts_code": ts_code, "src": "dc" }),
        );
        quote_rows(&self.call(&request)?)
    }

    fn realtime_tick(&self, symbol: &Symbol) -> Result<Vec<TickRecord>> {
        let request = ApiRequest::new(
            api::REALTIME_TICK,
            &self.token,
            json!({ "ts_code": symbol.as_str(), "src": "dc" }),
        );
        tick_rows(&self.call(&request)?)
    }
}

/// Maps a quote result set into records via the `TS_CODE`/`TIME`/`PRICE`
/// columns.
fn quote_rows(set: &ResultSet) -> Result<Vec<QuoteRecord>> {
    let symbol_col = set.column("TS_CODE")?;
    let time_col = set.column("TIME")?;
    let price_col = set.column("PRICE")?;

    let mut rows = Vec::with_capacity(set.items.len());
    for item in &set.items {
        rows.push(QuoteRecord {
            symbol: set.cell(item, symbol_col),
            time: set.cell(item, time_col),
            price: set.cell(item, price_col),
        });
    }
    Ok(rows)
}

/// Maps a tick result set into records, normalizing the `TYPE` label.
fn tick_rows(set: &ResultSet) -> Result<Vec<TickRecord>> {
    let time_col = set.column("TIME")?;
    let price_col = set.column("PRICE")?;
    let volume_col = set.column("VOLUME")?;
    let type_col = set.column("TYPE")?;

    let mut rows = Vec::with_capacity(set.items.len());
    for item in &set.items {
        rows.push(TickRecord {
            time: set.cell(item, time_col),
            price: set.cell(item, price_col),
            volume: set.cell(item, volume_col),
            side: TradeSide::from_provider_label(&set.cell(item, type_col)),
        });
    }
    Ok(rows)
}
