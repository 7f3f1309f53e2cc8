//! # Domain Models
//!
//! Records fetched from the stock API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockSummary`] | One row of the `/all` listing |
//! | [`StockBar`] | One daily bar of `/history` for a symbol |
//! | [`TradingDay`] | Calendar day parsed from an API timestamp |
//!
//! Records are immutable once decoded. A record missing a required field
//! fails decoding instead of producing a partial row.

mod models;
mod trading_day;

pub use models::{StockBar, StockSummary};
pub use trading_day::TradingDay;
