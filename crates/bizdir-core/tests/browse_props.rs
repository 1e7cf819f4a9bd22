// Rust guideline compliant 2026-02-06

//! Property-based tests for the browse state machine.
//!
//! These tests validate page reset, clear-all and page navigation rules
//! across arbitrary states and actions.

use bizdir_core::{BrowseAction, BrowseState, Effect, Facet, FilterSelection, PageMarker};
use proptest::prelude::*;

fn arb_facet() -> impl Strategy<Value = Facet> {
    prop::sample::select(Facet::ALL.to_vec())
}

fn arb_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec!["Cafe", "Lagos", "Ikeja", "FCT"]).prop_map(|v| Some(v.to_string())),
    ]
}

/// Generates an arbitrary reachable state.
fn arb_state() -> impl Strategy<Value = BrowseState> {
    (
        prop::string::string_regex("[a-z ]{0,6}").unwrap(),
        arb_value(),
        arb_value(),
        arb_value(),
        arb_value(),
        1usize..20,
    )
        .prop_map(|(search_text, category, city, neighborhood, state, page)| BrowseState {
            search_text,
            filters: FilterSelection {
                category,
                city,
                neighborhood,
                state,
            },
            page,
        })
}

/// Generates a selection-changing action.
fn arb_selection_action() -> impl Strategy<Value = BrowseAction> {
    prop_oneof![
        prop::string::string_regex("[a-z]{1,6}").unwrap().prop_map(BrowseAction::SetSearch),
        (arb_facet(), arb_value()).prop_map(|(facet, value)| BrowseAction::SetFilter(facet, value)),
        arb_facet().prop_map(BrowseAction::ClearFilter),
    ]
}

proptest! {
    /// Any change to the search text or a filter resets the page to 1.
    #[test]
    fn prop_selection_change_resets_page(
        state in arb_state(),
        action in arb_selection_action(),
        total_pages in 0usize..30,
    ) {
        let before = state.clone();
        let mut after = state;
        let effect = after.apply(action, total_pages).unwrap();

        prop_assert_eq!(effect, Effect::None);
        if after.search_text != before.search_text || after.filters != before.filters {
            prop_assert_eq!(after.page, 1);
        } else {
            prop_assert_eq!(after.page, before.page);
        }
    }

    /// Clear all always lands on the default state.
    #[test]
    fn prop_clear_all_resets_everything(state in arb_state(), total_pages in 0usize..30) {
        let mut state = state;
        state.apply(BrowseAction::ClearAll, total_pages).unwrap();
        prop_assert_eq!(state, BrowseState::default());
    }

    /// Going to a concrete page changes only the page and scrolls to top.
    #[test]
    fn prop_go_to_page_keeps_selections(
        state in arb_state(),
        (total_pages, page) in (1usize..30).prop_flat_map(|total| (Just(total), 1..=total)),
    ) {
        let before = state.clone();
        let mut after = state;
        let effect = after
            .apply(BrowseAction::GoToPage(PageMarker::Page(page)), total_pages)
            .unwrap();

        prop_assert_eq!(effect, Effect::ScrollToTop);
        prop_assert_eq!(after.page, page);
        prop_assert_eq!(after.search_text, before.search_text);
        prop_assert_eq!(after.filters, before.filters);
    }

    /// Pages past the last one are rejected and leave the state alone.
    #[test]
    fn prop_go_past_last_page_is_rejected(
        state in arb_state(),
        total_pages in 1usize..30,
        overshoot in 1usize..10,
    ) {
        let mut after = state.clone();
        prop_assert!(after
            .apply(BrowseAction::GoToPage(PageMarker::Page(total_pages + overshoot)), total_pages)
            .is_err());
        prop_assert_eq!(after, state);
    }

    /// Ellipsis markers never change the state.
    #[test]
    fn prop_ellipsis_is_inert(state in arb_state(), total_pages in 0usize..30) {
        let mut after = state.clone();
        prop_assert!(after
            .apply(BrowseAction::GoToPage(PageMarker::Ellipsis), total_pages)
            .is_err());
        prop_assert_eq!(after, state);
    }

    /// Previous and next move by one page only while enabled.
    #[test]
    fn prop_previous_next_respect_bounds(state in arb_state(), total_pages in 0usize..30) {
        let mut next = state.clone();
        match next.apply(BrowseAction::NextPage, total_pages) {
            Ok(effect) => {
                prop_assert!(state.page < total_pages);
                prop_assert_eq!(effect, Effect::ScrollToTop);
                prop_assert_eq!(next.page, state.page + 1);
            }
            Err(_) => {
                prop_assert!(state.page >= total_pages);
                prop_assert_eq!(&next, &state);
            }
        }

        let mut previous = state.clone();
        match previous.apply(BrowseAction::PreviousPage, total_pages) {
            Ok(_) => prop_assert_eq!(previous.page, state.page - 1),
            Err(_) => {
                prop_assert_eq!(state.page, 1);
                prop_assert_eq!(&previous, &state);
            }
        }
    }
}

#[test]
fn test_clearing_one_filter_keeps_the_others() {
    let mut state = BrowseState::default();
    state
        .apply(BrowseAction::SetFilter(Facet::Category, Some("Cafe".to_string())), 4)
        .unwrap();
    state
        .apply(BrowseAction::SetFilter(Facet::City, Some("Lagos".to_string())), 4)
        .unwrap();
    state.apply(BrowseAction::GoToPage(PageMarker::Page(3)), 4).unwrap();

    state.apply(BrowseAction::ClearFilter(Facet::Category), 4).unwrap();
    assert_eq!(state.page, 1);
    assert_eq!(state.filters.category, None);
    assert_eq!(state.filters.city.as_deref(), Some("Lagos"));
}
