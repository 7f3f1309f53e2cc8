use serde::Serialize;
use stockblast_core::{AppShell, FilterField, MemoryNavigator, Navigator, StockApi, StockSummary};

use crate::cli::ListingsArgs;
use crate::error::CliError;

use super::{direction, history, load, Report};

#[derive(Debug, Serialize)]
pub struct ListingsReport {
    pub url: String,
    pub filter: Option<(FilterField, String)>,
    pub total: usize,
    pub visible: usize,
    pub page: usize,
    pub page_count: usize,
    pub rows: Vec<StockSummary>,
}

pub async fn run(args: &ListingsArgs, api: &StockApi) -> Result<Report, CliError> {
    let mut shell = AppShell::new(MemoryNavigator::at("/all"));
    let plan = shell.mount();
    load(api, &mut shell, plan).await;

    if let Some(error) = shell.listings().and_then(|page| page.state().error()) {
        return Err(CliError::Fetch(error.clone()));
    }

    if let Some((field, value)) = requested_filter(args) {
        shell.set_filter(field, value)?;
    }

    let page = shell
        .listings_mut()
        .ok_or_else(|| CliError::Command(String::from("listings view was not mounted")))?;
    if let Some(column) = &args.sort {
        page.grid_mut().sort_by(column, direction(args.desc))?;
    }
    page.grid_mut().set_page(args.page);

    if let Some(index) = args.open {
        let plan = shell.select_row(index)?;
        load(api, &mut shell, plan).await;
        return history::report(&shell).map(Report::History);
    }

    report(&shell).map(Report::Listings)
}

fn requested_filter(args: &ListingsArgs) -> Option<(FilterField, &str)> {
    [
        (FilterField::Symbol, &args.symbol),
        (FilterField::Name, &args.name),
        (FilterField::Industry, &args.industry),
    ]
    .into_iter()
    .find_map(|(field, value)| value.as_deref().map(|value| (field, value)))
}

fn report(shell: &AppShell<MemoryNavigator>) -> Result<ListingsReport, CliError> {
    let page = shell
        .listings()
        .ok_or_else(|| CliError::Command(String::from("listings view was not mounted")))?;
    let grid = page.grid();

    Ok(ListingsReport {
        url: shell.navigator().location().to_string(),
        filter: page
            .filters()
            .active()
            .map(|(field, query)| (field, query.to_owned())),
        total: grid.rows().len(),
        visible: grid.visible_len(),
        page: grid.page(),
        page_count: grid.page_count(),
        rows: grid.page_rows().into_iter().cloned().collect(),
    })
}
