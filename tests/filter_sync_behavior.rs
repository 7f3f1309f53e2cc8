//! Behavior-driven tests for listing filter synchronization
//!
//! These tests verify how the three filter inputs, the grid and the page URL
//! stay in step while a user types.

use stockblast_tests::*;

// =============================================================================
// Filters: Mutual Exclusivity
// =============================================================================

#[tokio::test]
async fn when_user_types_in_each_field_only_the_last_one_stays_active() {
    // Given: A loaded listings view
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = mounted(&api, "/all").await;

    // When: The user types into symbol, then name, then industry, then symbol again
    let keystrokes = [
        (FilterField::Symbol, "a"),
        (FilterField::Name, "ac"),
        (FilterField::Industry, "Te"),
        (FilterField::Symbol, "x"),
        (FilterField::Name, ""),
    ];

    for (field, value) in keystrokes {
        shell.set_filter(field, value).expect("listings mounted");

        // Then: At most one query is non-empty after every keystroke
        let filters = shell.listings().expect("listings").filters();
        let active = [
            filters.symbol_query(),
            filters.name_query(),
            filters.industry_query(),
        ]
        .iter()
        .filter(|q| !q.is_empty())
        .count();
        assert!(active <= 1, "{active} filters active after typing into {field}");
    }
}

// =============================================================================
// Filters: URL Mirroring
// =============================================================================

#[tokio::test]
async fn when_symbol_is_typed_url_mirrors_it_without_new_history_entries() {
    // Given: A loaded listings view
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = mounted(&api, "/all").await;

    // When: The user types a symbol
    shell.set_filter(FilterField::Symbol, "abc").expect("listings mounted");

    // Then: The query string is rewritten in place
    assert_eq!(shell.navigator().location().search(), "?symbol=abc");
    assert_eq!(shell.navigator().history_len(), 1);

    // When: The user clears the input
    shell.set_filter(FilterField::Symbol, "").expect("listings mounted");

    // Then: No query string remains at all
    assert_eq!(shell.navigator().location().to_string(), "/all");
}

#[tokio::test]
async fn when_name_is_typed_in_capitals_filter_uses_lowercase() {
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = mounted(&api, "/all").await;

    shell.set_filter(FilterField::Name, "ACME").expect("listings mounted");

    let page = shell.listings().expect("listings");
    assert_eq!(page.filters().name_query(), "acme");
    assert_eq!(
        page.grid().column_filter("name").map(|f| f.filter.as_str()),
        Some("acme")
    );
    assert_eq!(shell.navigator().location().search(), "?name=acme");
}

#[tokio::test]
async fn when_industry_is_typed_case_is_preserved() {
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = mounted(&api, "/all").await;

    shell.set_filter(FilterField::Industry, "Tech").expect("listings mounted");

    let page = shell.listings().expect("listings");
    assert_eq!(page.filters().industry_query(), "Tech");
    assert_eq!(page.grid().column_filter("symbol"), None);
    assert_eq!(page.grid().column_filter("name"), None);
    assert_eq!(shell.navigator().location().search(), "?industry=Tech");
}

// =============================================================================
// Filters: End-to-End
// =============================================================================

#[tokio::test]
async fn when_symbol_filter_is_set_and_cleared_rows_narrow_then_restore() {
    // Given: Two listed stocks
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));
    let mut shell = mounted(&api, "/all").await;
    assert_eq!(shell.listings().expect("listings").grid().visible_len(), 2);

    // When: The symbol filter is set to "ab"
    shell.set_filter(FilterField::Symbol, "ab").expect("listings mounted");

    // Then: Only ABC remains visible
    let visible = shell.listings().expect("listings").grid().visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].symbol, "ABC");

    // When: The filter is cleared
    shell.set_filter(FilterField::Symbol, "").expect("listings mounted");

    // Then: Both rows are back
    assert_eq!(shell.listings().expect("listings").grid().visible_len(), 2);
}

#[tokio::test]
async fn when_page_is_opened_from_a_shared_link_filter_is_restored() {
    // Given: A bookmarked listings url with a name filter
    let (api, _) = api_with(ScriptedHttpClient::new().respond(200, LISTING_BODY));

    // When: The view mounts and the listing arrives
    let shell = mounted(&api, "/all?name=xyz").await;

    // Then: The name filter is active and only XYZ is visible
    let page = shell.listings().expect("listings");
    assert_eq!(page.filters().name_query(), "xyz");
    let visible = page.grid().visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].symbol, "XYZ");
}
