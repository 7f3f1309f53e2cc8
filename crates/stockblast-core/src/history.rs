//! # History Derivation
//!
//! Turns fetched [`StockBar`]s into display rows, range-selector options and
//! a closing-price series. The visible subset is always derived from the
//! full fetched set with [`derive_visible_rows`], never stored separately.

use std::cmp::Ordering;

use num_format::{Locale, ToFormattedString};
use serde::Serialize;

use crate::{ColumnDef, GridRow, StockBar};

/// Label of the range-selector option meaning "every row".
pub const NO_FILTER_LABEL: &str = "No filter";

pub const CHART_LABEL: &str = "Closing Prices";

pub fn history_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Date", "date", 90),
        ColumnDef::new("Open", "open", 60).right_aligned(),
        ColumnDef::new("High", "high", 60).right_aligned(),
        ColumnDef::new("Low", "low", 60).right_aligned(),
        ColumnDef::new("Close", "close", 60).right_aligned(),
        ColumnDef::new("Volumes", "volumes", 90).right_aligned(),
    ]
}

pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

/// Thousands-separated volume, `1234567` -> `1,234,567`.
pub fn format_volume(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// One history grid row, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volumes: String,
    #[serde(skip)]
    bar: StockBar,
}

impl HistoryRow {
    pub fn from_bar(bar: &StockBar) -> Self {
        Self {
            date: bar.date.format_display(),
            open: format_price(bar.open),
            high: format_price(bar.high),
            low: format_price(bar.low),
            close: format_price(bar.close),
            volumes: format_volume(bar.volume),
            bar: bar.clone(),
        }
    }
}

impl GridRow for HistoryRow {
    fn cell(&self, field: &str) -> Option<&str> {
        match field {
            "date" => Some(&self.date),
            "open" => Some(&self.open),
            "high" => Some(&self.high),
            "low" => Some(&self.low),
            "close" => Some(&self.close),
            "volumes" => Some(&self.volumes),
            _ => None,
        }
    }

    /// Dates sort chronologically and numbers numerically, not as display text.
    fn compare(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = (&self.bar, &other.bar);
        match field {
            "date" => a.date.cmp(&b.date),
            "open" => a.open.total_cmp(&b.open),
            "high" => a.high.total_cmp(&b.high),
            "low" => a.low.total_cmp(&b.low),
            "close" => a.close.total_cmp(&b.close),
            "volumes" => a.volume.cmp(&b.volume),
            _ => Ordering::Equal,
        }
    }
}

/// Range-selector index: `0` is the "No filter" sentinel, `k > 0` keeps the first `k` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RangeSelection(usize);

impl RangeSelection {
    pub const ALL: Self = Self(0);

    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn is_all(self) -> bool {
        self.0 == 0
    }
}

/// Visible slice of `all` for `selection`. Indices past the end keep every row.
pub fn derive_visible_rows<T>(all: &[T], selection: RangeSelection) -> &[T] {
    match selection.index() {
        0 => all,
        k => &all[..k.min(all.len())],
    }
}

/// Closing-price line for a chart widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Everything the history screen publishes from one fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryTable {
    name: Option<String>,
    rows: Vec<HistoryRow>,
    dates: Vec<String>,
    closes: Vec<f64>,
}

impl HistoryTable {
    pub fn from_bars(bars: &[StockBar]) -> Self {
        let rows = bars.iter().map(HistoryRow::from_bar).collect::<Vec<_>>();
        let dates = std::iter::once(String::from(NO_FILTER_LABEL))
            .chain(rows.iter().map(|row| row.date.clone()))
            .collect();

        Self {
            name: bars.first().map(|bar| bar.name.clone()),
            closes: bars.iter().map(|bar| bar.close).collect(),
            rows,
            dates,
        }
    }

    /// Stock display name, taken from the first record.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    /// Range-selector options, sentinel first.
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_rows(&self, selection: RangeSelection) -> &[HistoryRow] {
        derive_visible_rows(&self.rows, selection)
    }

    /// Chart series for the same slice the grid shows.
    pub fn chart(&self, selection: RangeSelection) -> ChartSeries {
        let labels = derive_visible_rows(&self.dates[1..], selection).to_vec();
        let data = derive_visible_rows(&self.closes, selection).to_vec();
        ChartSeries {
            label: CHART_LABEL,
            labels,
            data,
        }
    }
}
