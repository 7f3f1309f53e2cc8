//! # Grid Engine
//!
//! Row filtering, sorting and pagination behind the [`GridFilterEngine`] seam.
//!
//! Filter predicates are staged with [`GridFilterEngine::set_column_filter`]
//! and only take effect on [`GridFilterEngine::filter_changed`], so a batch of
//! predicate updates is observed as one change.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Rows per page, as the listing and history screens paginate.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFilterKind {
    Contains,
}

/// Column predicate: case-insensitive substring match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    pub kind: TextFilterKind,
    pub filter: String,
}

impl TextFilter {
    pub fn contains(filter: impl Into<String>) -> Self {
        Self {
            kind: TextFilterKind::Contains,
            filter: filter.into(),
        }
    }

    pub fn matches(&self, cell: &str) -> bool {
        match self.kind {
            TextFilterKind::Contains => {
                self.filter.is_empty() || cell.to_lowercase().contains(&self.filter.to_lowercase())
            }
        }
    }
}

/// Filter model of a grid widget.
pub trait GridFilterEngine {
    /// Stage the predicate for `column`; `None` removes any restriction.
    fn set_column_filter(&mut self, column: &str, filter: Option<TextFilter>);

    /// Apply every staged predicate and re-render.
    fn filter_changed(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub header: &'static str,
    pub field: &'static str,
    pub width: u16,
    pub sortable: bool,
    pub align: Align,
}

impl ColumnDef {
    pub const fn new(header: &'static str, field: &'static str, width: u16) -> Self {
        Self {
            header,
            field,
            width,
            sortable: true,
            align: Align::Left,
        }
    }

    pub const fn right_aligned(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// A record the grid can display.
pub trait GridRow {
    fn cell(&self, field: &str) -> Option<&str>;

    /// Ordering used when sorting by `field`; text order unless overridden.
    fn compare(&self, other: &Self, field: &str) -> Ordering {
        self.cell(field)
            .unwrap_or_default()
            .cmp(other.cell(field).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub column: String,
    pub direction: SortDirection,
}

/// In-memory paginated grid.
#[derive(Debug, Clone)]
pub struct RowGrid<R> {
    columns: Vec<ColumnDef>,
    rows: Vec<R>,
    filters: BTreeMap<String, TextFilter>,
    sort: Option<SortOrder>,
    page_size: usize,
    page: usize,
    visible: Vec<usize>,
    render_count: usize,
}

impl<R: GridRow> RowGrid<R> {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            filters: BTreeMap::new(),
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: 0,
            visible: Vec::new(),
            render_count: 0,
        }
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Replace the whole row set and re-render.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.recompute();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn column_filter(&self, column: &str) -> Option<&TextFilter> {
        self.filters.get(column)
    }

    pub fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    pub fn sort_by(&mut self, column: &str, direction: SortDirection) -> Result<(), ValidationError> {
        let def = self
            .columns
            .iter()
            .find(|c| c.field == column)
            .ok_or_else(|| ValidationError::UnknownColumn {
                column: column.to_owned(),
            })?;
        if !def.sortable {
            return Err(ValidationError::ColumnNotSortable {
                column: column.to_owned(),
            });
        }

        self.sort = Some(SortOrder {
            column: column.to_owned(),
            direction,
        });
        self.recompute();
        Ok(())
    }

    /// All rows passing the filters, in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.visible.iter().map(|&i| &self.rows[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size).max(1)
    }

    /// Move to a 0-based page, clamped to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn page_rows(&self) -> Vec<&R> {
        self.visible
            .iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .map(|&i| &self.rows[i])
            .collect()
    }

    /// Row at `index` on the current page.
    pub fn page_row(&self, index: usize) -> Result<&R, ValidationError> {
        let rows = self.page_rows();
        let len = rows.len();
        rows.get(index)
            .copied()
            .ok_or(ValidationError::RowOutOfRange { index, len })
    }

    /// How many times the visible set has been recomputed.
    pub const fn render_count(&self) -> usize {
        self.render_count
    }

    fn recompute(&mut self) {
        let mut visible = (0..self.rows.len())
            .filter(|&i| {
                self.filters.iter().all(|(column, filter)| {
                    filter.matches(self.rows[i].cell(column).unwrap_or_default())
                })
            })
            .collect::<Vec<_>>();

        if let Some(order) = &self.sort {
            visible.sort_by(|&a, &b| {
                let ordering = self.rows[a].compare(&self.rows[b], &order.column);
                match order.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        log::debug!(
            "grid recompute: {} of {} rows visible",
            visible.len(),
            self.rows.len()
        );
        self.visible = visible;
        self.render_count += 1;
        self.set_page(self.page);
    }
}

impl<R: GridRow> GridFilterEngine for RowGrid<R> {
    fn set_column_filter(&mut self, column: &str, filter: Option<TextFilter>) {
        match filter {
            Some(filter) if !filter.filter.is_empty() => {
                self.filters.insert(column.to_owned(), filter);
            }
            _ => {
                self.filters.remove(column);
            }
        }
    }

    fn filter_changed(&mut self) {
        self.page = 0;
        self.recompute();
    }
}
