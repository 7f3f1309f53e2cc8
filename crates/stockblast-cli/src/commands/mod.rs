mod dates;
mod history;
mod listings;

use serde::Serialize;
use stockblast_core::{
    run_fetch, ApiConfig, AppShell, FetchPlan, MemoryNavigator, SortDirection, StockApi,
};

use crate::cli::{Cli, Command, StockTarget};
use crate::error::CliError;

pub use dates::DatesReport;
pub use history::HistoryReport;
pub use listings::ListingsReport;

/// What a command leaves on screen.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Report {
    Listings(ListingsReport),
    History(HistoryReport),
    Dates(DatesReport),
}

pub async fn run(cli: &Cli) -> Result<Report, CliError> {
    let config = ApiConfig::new(&cli.api_url)?
        .with_timeout_ms(cli.timeout_ms)?
        .with_user_agent(cli.user_agent.as_str());
    let api = StockApi::new(config);

    match &cli.command {
        Command::Listings(args) => listings::run(args, &api).await,
        Command::History(args) => history::run(args, &api).await,
        Command::Dates(args) => dates::run(args, &api).await,
    }
}

/// Run the mount's fetch to completion and hand the result to the shell.
pub(crate) async fn load(api: &StockApi, shell: &mut AppShell<MemoryNavigator>, plan: FetchPlan) {
    if let Some(outcome) = run_fetch(api, plan).await {
        shell.deliver(outcome);
    }
}

pub(crate) const fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}

/// `/history` url for a `--symbol` or `--query` target.
pub(crate) fn history_url(target: &StockTarget) -> Result<String, CliError> {
    match (&target.symbol, &target.query) {
        (Some(symbol), _) => Ok(format!(
            "/history?symbol={}",
            symbol.trim().to_lowercase()
        )),
        (None, Some(query)) if query.starts_with('?') => Ok(format!("/history{query}")),
        (None, Some(query)) => Ok(format!("/history?{query}")),
        (None, None) => Err(CliError::Command(String::from(
            "either --symbol or --query is required",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_target_is_lowercased() {
        let target = StockTarget {
            symbol: Some(String::from("AAL")),
            query: None,
        };
        assert_eq!(history_url(&target).expect("valid"), "/history?symbol=aal");
    }

    #[test]
    fn query_target_is_forwarded() {
        let target = StockTarget {
            symbol: None,
            query: Some(String::from("symbol=aal&from=2020")),
        };
        assert_eq!(
            history_url(&target).expect("valid"),
            "/history?symbol=aal&from=2020"
        );
    }

    #[test]
    fn missing_target_is_a_command_error() {
        let target = StockTarget {
            symbol: None,
            query: None,
        };
        let err = history_url(&target).expect_err("must fail");
        assert_eq!(err.exit_code(), 10);
    }
}
