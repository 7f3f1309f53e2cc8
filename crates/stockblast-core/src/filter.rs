//! # Listing Filters
//!
//! Three text inputs (symbol, name, industry) filter the listings grid, but
//! only one may hold a value at a time. [`FilterController`] keeps that
//! invariant and mirrors the active filter into the grid engine and into
//! the page query string.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GridFilterEngine, Navigator, TextFilter, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Symbol,
    Name,
    Industry,
}

impl FilterField {
    pub const ALL: [Self; 3] = [Self::Symbol, Self::Name, Self::Industry];

    /// Grid column and query key share this name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Name => "name",
            Self::Industry => "industry",
        }
    }

    /// Symbol and name queries are lowercased; industry is kept as typed.
    pub fn normalize(self, value: &str) -> String {
        match self {
            Self::Symbol | Self::Name => value.to_lowercase(),
            Self::Industry => value.to_owned(),
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim().to_ascii_lowercase())
            .ok_or_else(|| ValidationError::InvalidFilterField {
                value: value.to_owned(),
            })
    }
}

/// The single active listing filter, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    active: Option<(FilterField, String)>,
}

impl FilterState {
    pub fn new(field: FilterField, value: &str) -> Self {
        let query = field.normalize(value);
        if query.is_empty() {
            return Self::default();
        }
        Self {
            active: Some((field, query)),
        }
    }

    pub fn active(&self) -> Option<(FilterField, &str)> {
        self.active
            .as_ref()
            .map(|(field, query)| (*field, query.as_str()))
    }

    /// Query text for `field`, empty unless it is the active one.
    pub fn query(&self, field: FilterField) -> &str {
        match &self.active {
            Some((active, query)) if *active == field => query,
            _ => "",
        }
    }

    pub fn symbol_query(&self) -> &str {
        self.query(FilterField::Symbol)
    }

    pub fn name_query(&self) -> &str {
        self.query(FilterField::Name)
    }

    pub fn industry_query(&self) -> &str {
        self.query(FilterField::Industry)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Handle one keystroke in the `field` input.
    pub fn set_filter(
        &mut self,
        field: FilterField,
        value: &str,
        grid: &mut impl GridFilterEngine,
        navigator: &mut dyn Navigator,
    ) {
        self.state = FilterState::new(field, value);

        let next = navigator
            .location()
            .with_single_param(field.as_str(), self.state.query(field));
        navigator.replace(next);

        for column in FilterField::ALL {
            let query = self.state.query(column);
            let predicate = (!query.is_empty()).then(|| TextFilter::contains(query));
            grid.set_column_filter(column.as_str(), predicate);
        }
        grid.filter_changed();
    }

    /// Apply the filter named by the current query string, if there is one.
    pub fn restore(&mut self, grid: &mut impl GridFilterEngine, navigator: &mut dyn Navigator) {
        let requested = FilterField::ALL.into_iter().find_map(|field| {
            navigator
                .location()
                .get(field.as_str())
                .map(|value| (field, value.to_owned()))
        });

        match requested {
            Some((field, value)) => {
                log::debug!("restoring {field} filter from url");
                self.set_filter(field, &value, grid, navigator);
            }
            None => {
                self.state = FilterState::default();
                grid.filter_changed();
            }
        }
    }
}
