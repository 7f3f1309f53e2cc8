use serde::Serialize;
use stockblast_core::{AppShell, ChartSeries, HistoryRow, MemoryNavigator, Navigator, StockApi};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::{direction, history_url, load, Report};

#[derive(Debug, Serialize)]
pub struct HistoryReport {
    pub url: String,
    pub heading: String,
    pub range: usize,
    pub range_label: String,
    pub visible: usize,
    pub page: usize,
    pub page_count: usize,
    pub rows: Vec<HistoryRow>,
    pub chart: ChartSeries,
}

pub async fn run(args: &HistoryArgs, api: &StockApi) -> Result<Report, CliError> {
    let mut shell = AppShell::new(MemoryNavigator::at(&history_url(&args.target)?));
    let plan = shell.mount();
    load(api, &mut shell, plan).await;

    shell.select_range(args.range)?;
    let page = shell
        .history_mut()
        .ok_or_else(|| CliError::Command(String::from("history view was not mounted")))?;
    if let Some(column) = &args.sort {
        page.grid_mut().sort_by(column, direction(args.desc))?;
    }
    page.grid_mut().set_page(args.page);

    report(&shell).map(Report::History)
}

pub fn report(shell: &AppShell<MemoryNavigator>) -> Result<HistoryReport, CliError> {
    let page = shell
        .history()
        .ok_or_else(|| CliError::Command(String::from("history view was not mounted")))?;
    if let Some(error) = page.state().error() {
        return Err(CliError::Fetch(error.clone()));
    }

    let table = page
        .state()
        .ready()
        .ok_or_else(|| CliError::Command(String::from("history has not loaded")))?;
    let grid = page.grid();
    let range = page.selection().index();

    Ok(HistoryReport {
        url: shell.navigator().location().to_string(),
        heading: page.heading(),
        range,
        range_label: table.dates().get(range).cloned().unwrap_or_default(),
        visible: grid.visible_len(),
        page: grid.page(),
        page_count: grid.page_count(),
        rows: grid.page_rows().into_iter().cloned().collect(),
        chart: table.chart(page.selection()),
    })
}
