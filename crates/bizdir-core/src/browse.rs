// Rust guideline compliant 2026-02-06

//! Browse state machine for search, filters and paging.
//!
//! The state is the search text, the four filter selections and the current
//! page. Transitions follow these rules:
//!
//! - Changing the search text or any filter → page resets to 1
//! - Clear all → every selection inactive, page 1
//! - Clear one filter → only that filter inactive, page 1
//! - Go to page → only for a concrete page, emits scroll-to-top
//! - Previous / next → only while the control is enabled
//!
//! Setting a selection to the value it already holds changes nothing.

use crate::models::Facet;
use crate::paginate::PageMarker;
use crate::query::FilterSelection;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A user interaction against the directory view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Replace the search text.
    SetSearch(String),
    /// Select a value for a facet; `None` or an empty value clears it.
    SetFilter(Facet, Option<String>),
    /// Clear a single facet filter.
    ClearFilter(Facet),
    /// Clear the search text and every filter.
    ClearAll,
    /// Jump to an entry of the page list.
    GoToPage(PageMarker),
    /// Move to the previous page.
    PreviousPage,
    /// Move to the next page.
    NextPage,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the state change.
    None,
    /// Bring the top of the result list into view.
    ScrollToTop,
}

/// Current search, filter and page selections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowseState {
    /// Raw search text as typed.
    pub search_text: String,
    /// Facet filters.
    pub filters: FilterSelection,
    /// Current page (1-indexed).
    pub page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filters: FilterSelection::default(),
            page: 1,
        }
    }
}

impl BrowseState {
    /// Returns true if search text or any filter is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search_text.trim().is_empty() || !self.filters.is_empty()
    }

    /// Checks whether an action is allowed in the current state.
    ///
    /// # Arguments
    ///
    /// * `action` - The action to check
    /// * `total_pages` - Page count of the current result set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The action targets an ellipsis marker, page zero, or a page past
    ///   the last one
    /// - Previous is requested on the first page
    /// - Next is requested on or beyond the last page
    pub fn can_apply(&self, action: &BrowseAction, total_pages: usize) -> Result<()> {
        match action {
            BrowseAction::GoToPage(PageMarker::Ellipsis) => Err(Error::InvalidTransition(
                "Ellipsis marker is not a page".to_string(),
            )),
            BrowseAction::GoToPage(PageMarker::Page(0)) => Err(Error::InvalidTransition(
                "Pages are numbered from 1".to_string(),
            )),
            BrowseAction::GoToPage(PageMarker::Page(page)) if *page > total_pages.max(1) => {
                Err(Error::InvalidTransition(format!(
                    "Page {} is past the last page ({})",
                    page, total_pages
                )))
            }
            BrowseAction::PreviousPage if self.page <= 1 => Err(Error::InvalidTransition(
                "Already on the first page".to_string(),
            )),
            BrowseAction::NextPage if self.page >= total_pages => Err(Error::InvalidTransition(
                "Already on the last page".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Applies an action.
    ///
    /// # Arguments
    ///
    /// * `action` - The action to apply
    /// * `total_pages` - Page count of the current result set
    ///
    /// # Returns
    ///
    /// The side effect the front end should perform.
    ///
    /// # Errors
    ///
    /// Returns an error if [`BrowseState::can_apply`] rejects the action; the
    /// state is left unchanged.
    pub fn apply(&mut self, action: BrowseAction, total_pages: usize) -> Result<Effect> {
        self.can_apply(&action, total_pages)?;

        match action {
            BrowseAction::SetSearch(text) => {
                if self.search_text != text {
                    self.search_text = text;
                    self.page = 1;
                }
            }
            BrowseAction::SetFilter(facet, value) => {
                let value = value.filter(|v| !v.is_empty());
                if self.filters.get(facet) != value.as_deref() {
                    self.filters.set(facet, value);
                    self.page = 1;
                }
            }
            BrowseAction::ClearFilter(facet) => {
                if self.filters.get(facet).is_some() {
                    self.filters.set(facet, None);
                    self.page = 1;
                }
            }
            BrowseAction::ClearAll => {
                *self = Self::default();
            }
            BrowseAction::GoToPage(PageMarker::Page(page)) => {
                self.page = page;
                return Ok(Effect::ScrollToTop);
            }
            BrowseAction::GoToPage(PageMarker::Ellipsis) => {}
            BrowseAction::PreviousPage => {
                self.page -= 1;
                return Ok(Effect::ScrollToTop);
            }
            BrowseAction::NextPage => {
                self.page += 1;
                return Ok(Effect::ScrollToTop);
            }
        }

        Ok(Effect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: usize) -> BrowseState {
        BrowseState {
            page,
            ..BrowseState::default()
        }
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = on_page(3);
        let effect = state
            .apply(BrowseAction::SetSearch("cafe".to_string()), 5)
            .unwrap();
        assert_eq!(state.page, 1);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_unchanged_search_keeps_page() {
        let mut state = on_page(3);
        state
            .apply(BrowseAction::SetSearch(String::new()), 5)
            .unwrap();
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = on_page(3);
        state
            .apply(
                BrowseAction::SetFilter(Facet::City, Some("Lagos".to_string())),
                5,
            )
            .unwrap();
        assert_eq!(state.page, 1);
        assert_eq!(state.filters.get(Facet::City), Some("Lagos"));
    }

    #[test]
    fn test_clear_one_filter_leaves_others() {
        let mut state = BrowseState {
            search_text: "bread".to_string(),
            filters: FilterSelection::default()
                .with(Facet::Category, "Bakery")
                .with(Facet::State, "Lagos"),
            page: 2,
        };
        state
            .apply(BrowseAction::ClearFilter(Facet::Category), 5)
            .unwrap();
        assert_eq!(state.page, 1);
        assert_eq!(state.filters.get(Facet::Category), None);
        assert_eq!(state.filters.get(Facet::State), Some("Lagos"));
        assert_eq!(state.search_text, "bread");
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut state = BrowseState {
            search_text: "bread".to_string(),
            filters: FilterSelection::default().with(Facet::Neighborhood, "Yaba"),
            page: 4,
        };
        state.apply(BrowseAction::ClearAll, 5).unwrap();
        assert_eq!(state, BrowseState::default());
    }

    #[test]
    fn test_go_to_page_scrolls_and_keeps_selections() {
        let mut state = BrowseState {
            search_text: "bread".to_string(),
            filters: FilterSelection::default().with(Facet::Category, "Bakery"),
            page: 1,
        };
        let effect = state
            .apply(BrowseAction::GoToPage(PageMarker::Page(3)), 5)
            .unwrap();
        assert_eq!(effect, Effect::ScrollToTop);
        assert_eq!(state.page, 3);
        assert_eq!(state.search_text, "bread");
        assert_eq!(state.filters.get(Facet::Category), Some("Bakery"));
    }

    #[test]
    fn test_ellipsis_is_rejected() {
        let mut state = on_page(2);
        let result = state.apply(BrowseAction::GoToPage(PageMarker::Ellipsis), 10);
        assert!(result.is_err());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_previous_and_next_respect_edges() {
        let mut state = on_page(1);
        assert!(state.apply(BrowseAction::PreviousPage, 3).is_err());
        assert_eq!(
            state.apply(BrowseAction::NextPage, 3).unwrap(),
            Effect::ScrollToTop
        );
        assert_eq!(state.page, 2);
        state.apply(BrowseAction::NextPage, 3).unwrap();
        assert!(state.apply(BrowseAction::NextPage, 3).is_err());
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_next_rejected_without_results() {
        let mut state = on_page(1);
        assert!(state.apply(BrowseAction::NextPage, 0).is_err());
    }
}
