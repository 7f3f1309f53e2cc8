//! # App Shell
//!
//! Routes the current [`Location`] to a view and owns that view's lifetime.
//!
//! ## Mount lifecycle
//!
//! ```text
//! mount() ──▶ FetchPlan ──▶ run_fetch(api, plan) ──▶ FetchOutcome ──▶ deliver()
//!   │                                                                   │
//!   └── bumps MountId ◀──────────── outcome applied only if ids match ──┘
//! ```
//!
//! Each mount gets a fresh [`MountId`]. A fetch started for one mount still
//! runs to completion after the user navigates away, but [`AppShell::deliver`]
//! discards its outcome because the id no longer matches.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    FetchError, FilterField, HistoryPage, ListingsPage, Location, Navigator, StockApi, StockBar,
    StockSummary, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Listings,
    History,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => Self::Home,
            "/all" => Self::Listings,
            "/history" => Self::History,
            _ => Self::NotFound,
        }
    }
}

/// Identity of one view mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct MountId(u64);

impl MountId {
    pub const fn get(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for MountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "mount#{}", self.0)
    }
}

/// Fetch a freshly mounted view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    Nothing,
    Listings { mount: MountId },
    History { mount: MountId, search: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchPayload {
    Listings(Result<Vec<StockSummary>, FetchError>),
    History(Result<Vec<StockBar>, FetchError>),
}

/// Completed fetch, tagged with the mount that requested it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub mount: MountId,
    pub payload: FetchPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    Discarded,
}

/// Execute a plan. `None` when the plan needs no fetch.
pub async fn run_fetch(api: &StockApi, plan: FetchPlan) -> Option<FetchOutcome> {
    match plan {
        FetchPlan::Nothing => None,
        FetchPlan::Listings { mount } => Some(FetchOutcome {
            mount,
            payload: FetchPayload::Listings(api.fetch_listings().await),
        }),
        FetchPlan::History { mount, search } => Some(FetchOutcome {
            mount,
            payload: FetchPayload::History(api.fetch_history(&search).await),
        }),
    }
}

#[derive(Debug, Clone)]
pub enum ActiveView {
    Home,
    Listings(ListingsPage),
    History(HistoryPage),
    NotFound(String),
}

impl ActiveView {
    pub const fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Listings(_) => Route::Listings,
            Self::History(_) => Route::History,
            Self::NotFound(_) => Route::NotFound,
        }
    }
}

/// Navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    /// `None` for the History marker, which is never a link.
    pub href: Option<&'static str>,
    pub active: bool,
    pub visible: bool,
}

#[derive(Debug)]
pub struct AppShell<N> {
    navigator: N,
    view: ActiveView,
    mount: MountId,
}

impl<N: Navigator> AppShell<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            view: ActiveView::Home,
            mount: MountId::default(),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn listings(&self) -> Option<&ListingsPage> {
        match &self.view {
            ActiveView::Listings(page) => Some(page),
            _ => None,
        }
    }

    pub fn history(&self) -> Option<&HistoryPage> {
        match &self.view {
            ActiveView::History(page) => Some(page),
            _ => None,
        }
    }

    pub fn history_mut(&mut self) -> Option<&mut HistoryPage> {
        match &mut self.view {
            ActiveView::History(page) => Some(page),
            _ => None,
        }
    }

    pub fn listings_mut(&mut self) -> Option<&mut ListingsPage> {
        match &mut self.view {
            ActiveView::Listings(page) => Some(page),
            _ => None,
        }
    }

    pub const fn current_mount(&self) -> MountId {
        self.mount
    }

    /// Tear down the current view and mount the one the location routes to.
    pub fn mount(&mut self) -> FetchPlan {
        self.mount = self.mount.next();
        let location = self.navigator.location();
        let route = Route::from_path(location.path());
        log::info!("{} -> {route:?} at {location}", self.mount);

        let (view, plan) = match route {
            Route::Home => (ActiveView::Home, FetchPlan::Nothing),
            Route::Listings => (
                ActiveView::Listings(ListingsPage::new()),
                FetchPlan::Listings { mount: self.mount },
            ),
            Route::History => {
                let search = location.search().to_owned();
                (
                    ActiveView::History(HistoryPage::new(search.clone())),
                    FetchPlan::History {
                        mount: self.mount,
                        search,
                    },
                )
            }
            Route::NotFound => (
                ActiveView::NotFound(location.path().to_owned()),
                FetchPlan::Nothing,
            ),
        };

        self.view = view;
        plan
    }

    /// Follow a link: push `url` onto history, then remount.
    pub fn navigate(&mut self, url: &str) -> FetchPlan {
        self.navigator.assign(Location::parse(url));
        self.mount()
    }

    /// Apply a completed fetch if it belongs to the mounted view.
    pub fn deliver(&mut self, outcome: FetchOutcome) -> Delivery {
        if outcome.mount != self.mount {
            log::warn!(
                "discarding fetch result for {} (current {})",
                outcome.mount,
                self.mount
            );
            return Delivery::Discarded;
        }

        match (&mut self.view, outcome.payload) {
            (ActiveView::Listings(page), FetchPayload::Listings(result)) => {
                page.apply(result, &mut self.navigator);
                Delivery::Applied
            }
            (ActiveView::History(page), FetchPayload::History(result)) => {
                page.apply(result);
                Delivery::Applied
            }
            _ => {
                log::warn!("discarding fetch result that does not match the mounted view");
                Delivery::Discarded
            }
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<(), ValidationError> {
        match &mut self.view {
            ActiveView::Listings(page) => {
                page.set_filter(field, value, &mut self.navigator);
                Ok(())
            }
            _ => Err(ValidationError::ViewNotMounted {
                expected: "listings",
            }),
        }
    }

    /// Click listing row `index` of the current page, landing on its history.
    pub fn select_row(&mut self, index: usize) -> Result<FetchPlan, ValidationError> {
        match &self.view {
            ActiveView::Listings(page) => page.select_row(index, &mut self.navigator)?,
            _ => {
                return Err(ValidationError::ViewNotMounted {
                    expected: "listings",
                })
            }
        }
        Ok(self.mount())
    }

    pub fn select_range(&mut self, index: usize) -> Result<(), ValidationError> {
        match &mut self.view {
            ActiveView::History(page) => page.select_range(index),
            _ => Err(ValidationError::ViewNotMounted { expected: "history" }),
        }
    }

    pub fn navbar(&self) -> Vec<NavLink> {
        let path = self.navigator.location().path();
        vec![
            NavLink {
                label: "Home",
                href: Some("/"),
                active: path == "/",
                visible: true,
            },
            NavLink {
                label: "Stocks",
                href: Some("/all"),
                active: path == "/all",
                visible: true,
            },
            NavLink {
                label: "History",
                href: None,
                active: true,
                visible: path.contains("/history"),
            },
        ]
    }
}
