// Rust guideline compliant 2026-02-06

//! Directory view derivation with memoization.

use crate::browse::BrowseState;
use crate::facets::Facets;
use crate::models::Listing;
use crate::paginate::{paginate, PageNavigation};
use crate::query::{query, FilterSelection};
use crate::store::{ListingStore, StoreId};
use serde::Serialize;
use std::sync::Arc;

/// Everything a front end needs to render the directory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView {
    /// Listings on the current page.
    pub items: Vec<Listing>,
    /// Number of listings matching the query.
    pub total_results: usize,
    /// Number of pages; zero when nothing matches.
    pub total_pages: usize,
    /// Current page number.
    pub page_number: usize,
    /// Whether any search text or filter is active.
    pub is_filtered: bool,
    /// Number of active facet filters.
    pub active_filters: usize,
    /// Page controls.
    pub navigation: PageNavigation,
    /// Filter choices for the whole collection.
    pub facets: Facets,
}

impl DirectoryView {
    /// Returns true if the query matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_results == 0
    }
}

/// Derives the directory view for a set of inputs.
///
/// This is a pure function of its arguments.
///
/// # Arguments
///
/// * `store` - The listing collection
/// * `search_text` - Raw search text
/// * `filters` - Facet filters
/// * `page_number` - Requested page (1-indexed)
///
/// # Returns
///
/// The derived view.
pub fn derive_view(
    store: &ListingStore,
    search_text: &str,
    filters: &FilterSelection,
    page_number: usize,
) -> DirectoryView {
    let matches = query(store.listings(), search_text, filters);
    let page = paginate(&matches, page_number);

    DirectoryView {
        items: page.items.iter().map(|listing| (*listing).clone()).collect(),
        total_results: page.total_items,
        total_pages: page.total_pages,
        page_number,
        is_filtered: !search_text.trim().is_empty() || !filters.is_empty(),
        active_filters: filters.active_count(),
        navigation: page.navigation(),
        facets: store.facets().clone(),
    }
}

/// Derives the view for a browse state.
pub fn derive_state_view(store: &ListingStore, state: &BrowseState) -> DirectoryView {
    derive_view(store, &state.search_text, &state.filters, state.page)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    store: StoreId,
    state: BrowseState,
}

/// Single-entry cache over [`derive_view`].
///
/// The cached view is reused while the collection identity and every input
/// stay the same; any change recomputes it.
#[derive(Debug, Default)]
pub struct ViewCache {
    entry: Option<(ViewKey, Arc<DirectoryView>)>,
    hits: u64,
    misses: u64,
}

impl ViewCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view for the inputs, deriving it only if they changed.
    ///
    /// # Arguments
    ///
    /// * `store` - The listing collection
    /// * `state` - Current browse state
    ///
    /// # Returns
    ///
    /// The shared view.
    pub fn get_or_derive(&mut self, store: &ListingStore, state: &BrowseState) -> Arc<DirectoryView> {
        let key = ViewKey {
            store: store.id(),
            state: state.clone(),
        };

        if let Some((cached_key, view)) = &self.entry {
            if *cached_key == key {
                self.hits += 1;
                tracing::debug!(page = state.page, "view cache hit");
                return Arc::clone(view);
            }
        }

        self.misses += 1;
        let view = Arc::new(derive_state_view(store, state));
        self.entry = Some((key, Arc::clone(&view)));
        view
    }

    /// Number of lookups served from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that derived a new view.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
