// Rust guideline compliant 2026-02-09

//! Directory page assembly for front ends.
//!
//! Turns command-line style options into a browse state, derives the view
//! and adds the presentation strings every front end shows: the summary
//! line, filter chips, listing cards and the empty state.

use crate::error::{AppError, Result};
use bizdir_core::{
    derive_view, BrowseState, DirectoryView, Facet, FilterSelection, Listing, ListingStore, Route,
};
use serde::Serialize;

/// Heading of the empty state.
pub const EMPTY_TITLE: &str = "No Results Found";

/// Body text of the empty state.
pub const EMPTY_MESSAGE: &str = "We couldn't find any businesses matching your filters. Try adjusting your search criteria to discover new opportunities.";

/// Label of the clear-all action.
pub const CLEAR_ALL_LABEL: &str = "Clear All Filters";

/// Browse options for a one-shot directory query.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Free-text search.
    pub search: Option<String>,
    /// Category filter.
    pub category: Option<String>,
    /// City filter.
    pub city: Option<String>,
    /// Neighborhood filter.
    pub neighborhood: Option<String>,
    /// State filter.
    pub state: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<usize>,
}

impl BrowseOptions {
    /// Converts the options into a browse state.
    ///
    /// # Errors
    ///
    /// Returns an error if the page number is zero.
    pub fn to_state(&self) -> Result<BrowseState> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::InvalidInput(
                "Page numbers start at 1".to_string(),
            ));
        }

        let active = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        Ok(BrowseState {
            search_text: self.search.clone().unwrap_or_default(),
            filters: FilterSelection {
                category: active(&self.category),
                city: active(&self.city),
                neighborhood: active(&self.neighborhood),
                state: active(&self.state),
            },
            page,
        })
    }
}

/// Parses a facet name.
///
/// Accepts the facet names case-insensitively, plus `area` for
/// neighborhood and `location` for city.
///
/// # Errors
///
/// Returns an error if the name is not a facet.
pub fn parse_facet(value: &str) -> Result<Facet> {
    match value.to_lowercase().as_str() {
        "category" => Ok(Facet::Category),
        "city" | "location" => Ok(Facet::City),
        "neighborhood" | "area" => Ok(Facet::Neighborhood),
        "state" => Ok(Facet::State),
        _ => Err(AppError::InvalidInput(format!("Unknown filter: {}", value))),
    }
}

/// An active filter as shown above the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    /// Facet the filter applies to.
    pub facet: Facet,
    /// Selected value.
    pub value: String,
    /// Display label.
    pub label: String,
}

/// Builds the chips for the active filters in facet order.
#[must_use]
pub fn filter_chips(filters: &FilterSelection) -> Vec<FilterChip> {
    filters
        .active()
        .into_iter()
        .map(|(facet, value)| FilterChip {
            facet,
            value: value.to_string(),
            label: facet.chip_label(value),
        })
        .collect()
}

/// Formats the results summary line.
#[must_use]
pub fn summary_line(view: &DirectoryView) -> String {
    let mut line = if view.is_filtered {
        format!("Showing {} filtered results", view.total_results)
    } else {
        format!("Showing {} businesses", view.total_results)
    };
    if view.total_pages > 1 {
        line.push_str(&format!(" • Page {} of {}", view.page_number, view.total_pages));
    }
    line
}

/// Compact listing summary shown in the result grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    /// Listing identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: String,
    /// City, or the address when the city is unknown.
    pub location: String,
    /// Rating, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Review count label, e.g. `(12 reviews)`.
    pub reviews: String,
    /// Path of the detail view.
    pub route: String,
}

impl ListingCard {
    /// Builds the card for a listing.
    #[must_use]
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            category: listing.category.clone(),
            location: listing.location_label().to_string(),
            rating: listing.rating,
            reviews: format!("({} reviews)", listing.review_count),
            route: Route::Detail(listing.id.clone()).to_path(),
        }
    }
}

/// A fully assembled directory page.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPage {
    /// Directory title.
    pub title: String,
    /// Browse state the page was derived from.
    pub state: BrowseState,
    /// Results summary line.
    pub summary: String,
    /// Active filter chips.
    pub chips: Vec<FilterChip>,
    /// Cards for the listings on this page.
    pub cards: Vec<ListingCard>,
    /// The derived view.
    pub view: DirectoryView,
}

impl DirectoryPage {
    /// Assembles a page from a derived view.
    #[must_use]
    pub fn new(title: &str, state: &BrowseState, view: &DirectoryView) -> Self {
        Self {
            title: title.to_string(),
            state: state.clone(),
            summary: summary_line(view),
            chips: filter_chips(&state.filters),
            cards: view.items.iter().map(ListingCard::from_listing).collect(),
            view: view.clone(),
        }
    }

    /// Returns true if the page should show the empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}

/// Returns the active filters whose value no listing carries.
///
/// Such a filter is still applied and simply matches nothing.
#[must_use]
pub fn unknown_filters<'a>(store: &ListingStore, filters: &'a FilterSelection) -> Vec<(Facet, &'a str)> {
    let facets = store.facets();
    filters
        .active()
        .into_iter()
        .filter(|(facet, value)| !facets.contains(*facet, value))
        .collect()
}

/// Runs a one-shot directory query.
///
/// # Arguments
///
/// * `store` - The listing collection
/// * `title` - Directory title
/// * `options` - Search, filters and page
///
/// # Returns
///
/// The assembled directory page.
///
/// # Errors
///
/// Returns an error if the page number is zero or past the last page.
pub fn browse(store: &ListingStore, title: &str, options: &BrowseOptions) -> Result<DirectoryPage> {
    let state = options.to_state()?;
    let view = derive_view(store, &state.search_text, &state.filters, state.page);
    if state.page > view.total_pages.max(1) {
        return Err(AppError::InvalidInput(format!(
            "Page {} is past the last page ({})",
            state.page, view.total_pages
        )));
    }
    tracing::debug!(
        results = view.total_results,
        page = state.page,
        "directory page derived"
    );
    Ok(DirectoryPage::new(title, &state, &view))
}
