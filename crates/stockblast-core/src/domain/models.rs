use serde::{Deserialize, Serialize};

use crate::TradingDay;

/// One listing row: the three fields the listings grid shows.
///
/// Any other field the server sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub name: String,
    pub industry: String,
}

impl StockSummary {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            industry: industry.into(),
        }
    }
}

/// Daily OHLCV bar for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBar {
    pub name: String,
    #[serde(rename = "timestamp")]
    pub date: TradingDay,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(alias = "volumes")]
    pub volume: u64,
}
