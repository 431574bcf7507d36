//! Trade aggressor side and provider-label normalization.
//!
//! The provider labels each tick with a natural-language trade type
//! (`买盘` for buy-side, `卖盘` for sell-side, anything else neutral).
//! On disk the side is encoded as a one-letter code: `B`, `S`, or `N`.

use strum_macros::{Display, EnumString};

/// Aggressor side of a single executed trade.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Display, EnumString)]
pub enum TradeSide {
    /// Buy-side initiated trade, encoded `B`.
    #[strum(serialize = "B")]
    Buy,
    /// Sell-side initiated trade, encoded `S`.
    #[strum(serialize = "S")]
    Sell,
    /// Neutral trade, encoded `N`.
    #[strum(serialize = "N")]
    Neutral,
}

impl TradeSide {
    /// Normalizes the provider's trade-type label into a side.
    ///
    /// Unrecognized labels fall back to `Neutral`.
    pub fn from_provider_label(label: &str) -> Self {
        match label {
            "买盘" => TradeSide::Buy,
            "卖盘" => TradeSide::Sell,
            _ => TradeSide::Neutral,
        }
    }
}
