//! Listings and history screens.

use serde::Serialize;

use crate::{
    history::history_columns, ColumnDef, FetchError, FilterController, FilterField, FilterState,
    GridRow, HistoryRow, HistoryTable, Location, Navigator, RangeSelection, RowGrid, StockBar,
    StockSummary, ValidationError,
};

/// Data status of a mounted view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> ViewState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl GridRow for StockSummary {
    fn cell(&self, field: &str) -> Option<&str> {
        match field {
            "symbol" => Some(&self.symbol),
            "name" => Some(&self.name),
            "industry" => Some(&self.industry),
            _ => None,
        }
    }
}

pub fn listing_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("Symbol", "symbol", 100),
        ColumnDef::new("Name", "name", 250),
        ColumnDef::new("Industry", "industry", 180),
    ]
}

/// Symbol input accepts at most this many characters.
pub const SYMBOL_MAX_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct ListingsPage {
    state: ViewState<()>,
    grid: RowGrid<StockSummary>,
    filters: FilterController,
}

impl ListingsPage {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            grid: RowGrid::new(listing_columns()),
            filters: FilterController::new(),
        }
    }

    pub fn state(&self) -> &ViewState<()> {
        &self.state
    }

    pub fn grid(&self) -> &RowGrid<StockSummary> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut RowGrid<StockSummary> {
        &mut self.grid
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    /// Publish the fetched listing, then apply any filter named in the URL.
    pub fn apply(&mut self, result: Result<Vec<StockSummary>, FetchError>, navigator: &mut dyn Navigator) {
        match result {
            Ok(stocks) => {
                log::info!("listings ready: {} stocks", stocks.len());
                self.grid.set_rows(stocks);
                self.filters.restore(&mut self.grid, navigator);
                self.state = ViewState::Ready(());
            }
            Err(error) => {
                log::warn!("listings fetch failed: {error}");
                self.state = ViewState::Failed(error);
            }
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str, navigator: &mut dyn Navigator) {
        let value = match field {
            FilterField::Symbol => value.chars().take(SYMBOL_MAX_LEN).collect::<String>(),
            FilterField::Name | FilterField::Industry => value.to_owned(),
        };
        self.filters
            .set_filter(field, &value, &mut self.grid, navigator);
    }

    /// Follow a row click on the current page to that stock's history.
    pub fn select_row(&self, index: usize, navigator: &mut dyn Navigator) -> Result<(), ValidationError> {
        let stock = self.grid.page_row(index)?;
        let target = Location::new("/history").with_param("symbol", stock.symbol.to_lowercase());
        navigator.assign(target);
        Ok(())
    }
}

impl Default for ListingsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct HistoryPage {
    search: String,
    state: ViewState<HistoryTable>,
    grid: RowGrid<HistoryRow>,
    selection: RangeSelection,
}

impl HistoryPage {
    /// `search` is the page query string, forwarded verbatim to the history endpoint.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            state: ViewState::Loading,
            grid: RowGrid::new(history_columns()),
            selection: RangeSelection::ALL,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn state(&self) -> &ViewState<HistoryTable> {
        &self.state
    }

    pub fn grid(&self) -> &RowGrid<HistoryRow> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut RowGrid<HistoryRow> {
        &mut self.grid
    }

    pub const fn selection(&self) -> RangeSelection {
        self.selection
    }

    pub fn apply(&mut self, result: Result<Vec<StockBar>, FetchError>) {
        match result {
            Ok(bars) => {
                log::info!("history ready: {} bars", bars.len());
                self.state = ViewState::Ready(HistoryTable::from_bars(&bars));
                self.refresh_rows();
            }
            Err(error) => {
                log::warn!("history fetch failed: {error}");
                self.state = ViewState::Failed(error);
            }
        }
    }

    /// Choose a range-selector option; `0` restores every row.
    pub fn select_range(&mut self, index: usize) -> Result<(), ValidationError> {
        if let Some(table) = self.state.ready() {
            let available = table.dates().len();
            if index >= available {
                return Err(ValidationError::RangeOutOfBounds { index, available });
            }
        }
        self.selection = RangeSelection::new(index);
        self.refresh_rows();
        Ok(())
    }

    /// `"<name> Stock History"`, or just `"Stock History"` before data arrives.
    pub fn heading(&self) -> String {
        match self.state.ready().and_then(HistoryTable::name) {
            Some(name) => format!("{name} Stock History"),
            None => String::from("Stock History"),
        }
    }

    pub fn chart(&self) -> Option<crate::ChartSeries> {
        self.state
            .ready()
            .map(|table| table.chart(self.selection))
    }

    fn refresh_rows(&mut self) {
        let rows = self
            .state
            .ready()
            .map(|table| table.visible_rows(self.selection).to_vec())
            .unwrap_or_default();
        self.grid.set_rows(rows);
    }
}
