//! CLI argument definitions for Stock Blast.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `listings` | Show the stock listing grid, optionally filtered |
//! | `history` | Show one stock's history grid and closing-price series |
//! | `dates` | List the range selector options for one stock |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--api-url` | `http://131.181.190.87:3001` | Stock API base url (env `STOCKBLAST_API_URL`) |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--user-agent` | `stockblast/0.1.0` | User agent sent with every request |
//! | `--format` | `table` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! stockblast listings --industry "Health Care" --sort name
//! stockblast history --symbol aal --range 10
//! stockblast history --query "?symbol=aal" --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

use stockblast_core::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

/// Stock Blast - stock listings and price history in the terminal
#[derive(Debug, Parser)]
#[command(name = "stockblast", author, version, about = "Stock listings and price history")]
pub struct Cli {
    /// Base url of the stock API.
    #[arg(long, global = true, env = "STOCKBLAST_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// User agent sent with every request.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the stock listing, filtered by at most one field.
    Listings(ListingsArgs),
    /// Show daily history for one stock.
    History(HistoryArgs),
    /// List the range selector options for one stock.
    Dates(DatesArgs),
}

#[derive(Debug, Args)]
pub struct ListingsArgs {
    /// Filter by symbol (substring, case-insensitive).
    #[arg(long, conflicts_with_all = ["name", "industry"])]
    pub symbol: Option<String>,

    /// Filter by company name (substring, case-insensitive).
    #[arg(long, conflicts_with = "industry")]
    pub name: Option<String>,

    /// Filter by industry (substring).
    #[arg(long)]
    pub industry: Option<String>,

    /// Column to sort by (symbol, name, industry).
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, default_value_t = false, requires = "sort")]
    pub desc: bool,

    /// 0-based page of 10 rows.
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Follow the click on this row of the page into its history.
    #[arg(long)]
    pub open: Option<usize>,
}

#[derive(Debug, Args)]
pub struct StockTarget {
    /// Stock symbol, forwarded as `?symbol=<symbol>`.
    #[arg(long, conflicts_with = "query")]
    pub symbol: Option<String>,

    /// Raw query string forwarded to the history endpoint, e.g. "?symbol=aal".
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub target: StockTarget,

    /// Range selector index; 0 shows every row.
    #[arg(long, default_value_t = 0)]
    pub range: usize,

    /// 0-based page of 10 rows.
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Column to sort by (date, open, high, low, close, volumes).
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, default_value_t = false, requires = "sort")]
    pub desc: bool,
}

#[derive(Debug, Args)]
pub struct DatesArgs {
    #[command(flatten)]
    pub target: StockTarget,
}
