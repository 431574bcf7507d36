//! Wire types for the market-data provider's HTTP endpoint.
//!
//! Every call is a JSON `POST` carrying the API name, the account token, a
//! bag of call parameters, and an optional field filter. The provider answers
//! with an envelope of `{ code, msg, data }` where `data` is a column-oriented
//! result set: a list of column names plus one array per row.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FeedError;

/// Endpoint all provider calls are posted to.
pub const API_URL: &str = "https://api.tushare.pro";

/// API name for the multi-symbol real-time quote snapshot.
pub const REALTIME_QUOTE: &str = "realtime_quote";
/// API name for the per-symbol tick tape.
pub const REALTIME_TICK: &str = "realtime_tick";

/// Request body posted to the provider.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRequest {
    /// Name of the remote API to invoke, e.g. `realtime_quote`.
    pub api_name: String,
    /// Account token authorizing the call.
    pub token: String,
    /// Call parameters, e.g. `{"ts_code": "600000.SH", "src": "dc"}`.
    pub params: Value,
    /// Comma-separated field filter; empty requests every column.
    pub fields: String,
}

impl ApiRequest {
    /// Creates a request for `api_name` with the given parameters and no
    /// field filter.
    pub fn new(api_name: &str, token: &str, params: Value) -> Self {
        ApiRequest {
            api_name: String::from(api_name),
            token: String::from(token),
            params,
            fields: String::new(),
        }
    }
}

/// Response envelope returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Status code; zero means success.
    pub code: i64,
    /// Error message accompanying a non-zero code.
    #[serde(default)]
    pub msg: Option<String>,
    /// Column-oriented payload, present on success.
    #[serde(default)]
    pub data: Option<ResultSet>,
}

impl ApiResponse {
    /// Unwraps the envelope into its result set.
    ///
    /// A non-zero `code` becomes `FeedError::Provider`; a success envelope
    /// without a data block is a format error.
    pub fn into_result_set(self) -> Result<ResultSet, FeedError> {
        if self.code != 0 {
            return Err(FeedError::Provider {
                code: self.code,
                msg: self.msg.unwrap_or_default(),
            });
        }
        self.data
            .ok_or_else(|| FeedError::Format("response carried no data block".to_string()))
    }
}

/// Column-oriented result set: column names plus one value array per row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    /// Column names, in item order.
    pub fields: Vec<String>,
    /// Rows; each inner array is indexed by column position.
    pub items: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Looks up the position of a named column.
    pub fn column(&self, name: &str) -> Result<usize, FeedError> {
        self.fields
            .iter()
            .position(|field| field == name)
            .ok_or_else(|| FeedError::MissingColumn(name.to_string()))
    }

    /// Returns the text of the cell at `(row, column)`, or an empty string
    /// when the row is shorter than the column index.
    pub fn cell(&self, row: &[Value], column: usize) -> String {
        row.get(column).map(cell_text).unwrap_or_default()
    }
}

/// Renders a JSON cell the way it appears in the output CSV.
///
/// Strings pass through verbatim; integral numbers drop the decimal point;
/// nulls become the empty string.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
