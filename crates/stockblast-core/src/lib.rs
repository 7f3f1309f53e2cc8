//! # Stock Blast Core
//!
//! View-state core for the Stock Blast listings and history screens.
//!
//! ## Overview
//!
//! The screens show data from two read-only endpoints of a remote stock API:
//!
//! - **Listings** (`/all`): every stock in a sortable, paginated grid, filtered
//!   by one of three mutually exclusive text inputs (symbol, name, industry)
//!   whose value is mirrored into the page query string.
//! - **History** (`/history?symbol=..`): daily bars for one stock in a grid plus
//!   a closing-price series, both restricted by a range selector.
//!
//! Browser concerns sit behind explicit seams so the logic runs headless:
//!
//! | Seam | Stand-in |
//! |------|----------|
//! | [`HttpClient`] | [`ReqwestHttpClient`], [`ScriptedHttpClient`] |
//! | [`Navigator`] | [`MemoryNavigator`] |
//! | [`GridFilterEngine`] | [`RowGrid`] |
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Listing and history fetches, error-body decoding |
//! | [`app`] | Routing, mount lifecycle, navbar |
//! | [`config`] | API connection settings |
//! | [`domain`] | Stock records |
//! | [`error`] | Fetch and validation errors |
//! | [`filter`] | Single-active-filter controller |
//! | [`grid`] | Grid engine seam and in-memory grid |
//! | [`history`] | Display formatting and range derivation |
//! | [`http_client`] | HTTP transport |
//! | [`navigation`] | Location and history state |
//! | [`views`] | Listings and history screens |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockblast_core::{run_fetch, ApiConfig, AppShell, FilterField, MemoryNavigator, StockApi};
//!
//! let api = StockApi::new(ApiConfig::default());
//! let mut shell = AppShell::new(MemoryNavigator::at("/all"));
//!
//! let plan = shell.mount();
//! if let Some(outcome) = run_fetch(&api, plan).await {
//!     shell.deliver(outcome);
//! }
//! shell.set_filter(FilterField::Symbol, "aa")?;
//! assert_eq!(shell.navigator().location().search(), "?symbol=aa");
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod grid;
pub mod history;
pub mod http_client;
pub mod navigation;
pub mod views;

pub use api::StockApi;
pub use app::{
    run_fetch, ActiveView, AppShell, Delivery, FetchOutcome, FetchPayload, FetchPlan, MountId,
    NavLink, Route,
};
pub use config::ApiConfig;
pub use domain::{StockBar, StockSummary, TradingDay};
pub use error::{FetchError, FetchErrorKind, ValidationError};
pub use filter::{FilterController, FilterField, FilterState};
pub use grid::{
    Align, ColumnDef, GridFilterEngine, GridRow, RowGrid, SortDirection, SortOrder, TextFilter,
    TextFilterKind,
};
pub use history::{
    derive_visible_rows, format_price, format_volume, history_columns, ChartSeries, HistoryRow,
    HistoryTable, RangeSelection,
};
pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
    ScriptedHttpClient,
};
pub use navigation::{Location, MemoryNavigator, Navigator};
pub use views::{listing_columns, HistoryPage, ListingsPage, ViewState};
