//! Behavior-driven tests for view mounting and navigation
//!
//! These tests verify how fetches are tied to the view that started them.

use stockblast_core::FetchOutcome;
use stockblast_tests::*;

#[tokio::test]
async fn when_user_leaves_before_fetch_resolves_late_result_is_dropped() {
    // Given: A listings mount whose fetch is still in flight
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = AppShell::new(MemoryNavigator::at("/all"));
    let stale_plan = shell.mount();

    // When: The user navigates home, then the fetch completes
    let home_plan = shell.navigate("/");
    assert_eq!(home_plan, FetchPlan::Nothing);
    let outcome: FetchOutcome = run_fetch(&api, stale_plan).await.expect("fetch ran");

    // Then: Its result is discarded and the home view is untouched
    assert_eq!(shell.deliver(outcome), Delivery::Discarded);
    assert_eq!(shell.view().route(), Route::Home);
}

#[tokio::test]
async fn when_listing_row_is_clicked_history_loads_for_that_symbol() {
    // Given: A loaded listing and a history response queued behind it
    let (api, client) = api_with(
        ScriptedHttpClient::new()
            .respond(200, LISTING_BODY)
            .respond(200, history_body(2)),
    );
    let mut shell = mounted(&api, "/all").await;

    // When: The user clicks the first row
    let plan = shell.select_row(0).expect("row exists");
    let outcome = run_fetch(&api, plan).await.expect("history fetch");
    assert_eq!(shell.deliver(outcome), Delivery::Applied);

    // Then: History was requested with the lowercased symbol and pushed onto history
    assert_eq!(
        client.requested_urls().last().map(String::as_str),
        Some("http://stocks.test/history?symbol=abc")
    );
    assert_eq!(shell.navigator().history_len(), 2);
    assert_eq!(shell.history().expect("history").grid().visible_len(), 2);
}

#[tokio::test]
async fn when_view_is_remounted_data_is_fetched_again() {
    let (api, client) = api_with(
        ScriptedHttpClient::new()
            .respond(200, LISTING_BODY)
            .respond(200, LISTING_BODY),
    );
    let mut shell = mounted(&api, "/all").await;

    let plan = shell.navigate("/all");
    let outcome = run_fetch(&api, plan).await.expect("listings fetch");
    shell.deliver(outcome);

    assert_eq!(client.requested_urls().len(), 2);
}

#[tokio::test]
async fn when_filtering_no_refetch_happens() {
    let (api, client) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = mounted(&api, "/all").await;

    shell.set_filter(FilterField::Industry, "Fin").expect("listings mounted");
    shell.set_filter(FilterField::Symbol, "a").expect("listings mounted");

    assert_eq!(client.requested_urls().len(), 1);
}

#[test]
fn unknown_paths_mount_a_not_found_view() {
    let mut shell = AppShell::new(MemoryNavigator::at("/portfolio"));

    assert_eq!(shell.mount(), FetchPlan::Nothing);
    assert_eq!(shell.view().route(), Route::NotFound);
}
