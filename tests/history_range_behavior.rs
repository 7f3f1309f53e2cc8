//! Behavior-driven tests for the history screen
//!
//! These tests verify how fetched bars become grid rows, range options and
//! a chart series, and how the range selector restricts both.

use stockblast_tests::*;

#[tokio::test]
async fn when_history_loads_dates_are_shown_day_first_with_a_sentinel() {
    // Given: One bar stamped 2023-04-05
    let body = r#"[{"name":"Acme Co","timestamp":"2023-04-05T00:00:00","open":1.234,"high":2.0,"low":1.0,"close":1.5,"volumes":1234567}]"#;
    let (api, client) = api_with(ScriptedHttpClient::new().respond(200, body));

    // When: The history view mounts for ?symbol=abc
    let shell = mounted(&api, "/history?symbol=abc").await;

    // Then: The query string was forwarded verbatim
    assert_eq!(
        client.requested_urls(),
        vec!["http://stocks.test/history?symbol=abc"]
    );

    // And: Dates, prices and volumes are formatted for display
    let page = shell.history().expect("history");
    let table = page.state().ready().expect("loaded");
    assert_eq!(table.dates(), ["No filter", "05/04/2023"]);
    let row = &table.rows()[0];
    assert_eq!(row.date, "05/04/2023");
    assert_eq!(row.open, "1.23");
    assert_eq!(row.volumes, "1,234,567");
    assert_eq!(page.heading(), "Acme Co Stock History");
}

#[tokio::test]
async fn when_range_is_narrowed_then_reset_the_full_set_returns() {
    // Given: Fifteen fetched bars
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, history_body(15)));
    let mut shell = mounted(&api, "/history?symbol=abc").await;

    // When: The user selects index 5, then "No filter", then 5 again
    shell.select_range(5).expect("valid index");
    let first = shell.history().expect("history").grid().rows().to_vec();
    let first_chart = shell.history().expect("history").chart().expect("chart");

    shell.select_range(0).expect("valid index");
    let all = shell.history().expect("history").grid().visible_len();

    shell.select_range(5).expect("valid index");
    let second = shell.history().expect("history").grid().rows().to_vec();
    let second_chart = shell.history().expect("history").chart().expect("chart");

    // Then: Both narrowed selections agree and "No filter" shows every bar
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
    assert_eq!(first_chart, second_chart);
    assert_eq!(all, 15);
}

#[tokio::test]
async fn when_range_is_selected_chart_and_grid_show_the_same_days() {
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, history_body(15)));
    let mut shell = mounted(&api, "/history?symbol=abc").await;

    shell.select_range(3).expect("valid index");

    let page = shell.history().expect("history");
    let chart = page.chart().expect("chart");
    let grid_dates = page
        .grid()
        .rows()
        .iter()
        .map(|row| row.date.clone())
        .collect::<Vec<_>>();
    assert_eq!(chart.labels, grid_dates);
    assert_eq!(chart.data, vec![10.5, 11.5, 12.5]);
    assert_eq!(chart.label, "Closing Prices");
}

#[tokio::test]
async fn when_range_index_exceeds_options_selection_is_rejected() {
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, history_body(3)));
    let mut shell = mounted(&api, "/history?symbol=abc").await;

    let result = shell.select_range(9);

    assert!(result.is_err());
    assert_eq!(shell.history().expect("history").grid().visible_len(), 3);
}

#[tokio::test]
async fn when_history_query_has_reserved_characters_it_is_requested_byte_for_byte() {
    for search in [
        "?symbol=aal&from=2020-03-01T00:00:00.000Z",
        "?symbol=a+b",
        "?symbol",
        "?name=acme%20co",
    ] {
        // Given: The history route with an unusual query string
        let (api, client) = api_with(ScriptedHttpClient::new().respond(200, "[]"));

        // When: The view mounts
        let _shell = mounted(&api, &format!("/history{search}")).await;

        // Then: The request carries the query exactly as it appeared in the URL
        assert_eq!(
            client.requested_urls(),
            vec![format!("http://stocks.test/history{search}")]
        );
    }
}
