use serde::Serialize;
use stockblast_core::{AppShell, MemoryNavigator, StockApi};

use crate::cli::DatesArgs;
use crate::error::CliError;

use super::{history_url, load, Report};

#[derive(Debug, Serialize)]
pub struct DateOption {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct DatesReport {
    pub heading: String,
    pub options: Vec<DateOption>,
}

pub async fn run(args: &DatesArgs, api: &StockApi) -> Result<Report, CliError> {
    let mut shell = AppShell::new(MemoryNavigator::at(&history_url(&args.target)?));
    let plan = shell.mount();
    load(api, &mut shell, plan).await;

    let page = shell
        .history()
        .ok_or_else(|| CliError::Command(String::from("history view was not mounted")))?;
    if let Some(error) = page.state().error() {
        return Err(CliError::Fetch(error.clone()));
    }

    let options = page
        .state()
        .ready()
        .map(|table| {
            table
                .dates()
                .iter()
                .enumerate()
                .map(|(index, label)| DateOption {
                    index,
                    label: label.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Report::Dates(DatesReport {
        heading: page.heading(),
        options,
    }))
}
