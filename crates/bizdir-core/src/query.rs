// Rust guideline compliant 2026-02-06

//! Query engine: free-text search combined with facet filters.

use crate::models::{Facet, Listing};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Collections at least this large are filtered in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// The four optional equality filters.
///
/// A filter is active when it holds a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Category filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// City filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Neighborhood filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// State filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl FilterSelection {
    /// Returns the active value for a facet, if any.
    #[must_use]
    pub fn get(&self, facet: Facet) -> Option<&str> {
        let slot = match facet {
            Facet::Category => &self.category,
            Facet::City => &self.city,
            Facet::Neighborhood => &self.neighborhood,
            Facet::State => &self.state,
        };
        slot.as_deref().filter(|value| !value.is_empty())
    }

    /// Sets or clears the value for a facet.
    ///
    /// An empty value clears the filter.
    pub fn set(&mut self, facet: Facet, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        match facet {
            Facet::Category => self.category = value,
            Facet::City => self.city = value,
            Facet::Neighborhood => self.neighborhood = value,
            Facet::State => self.state = value,
        }
    }

    /// Builder-style variant of [`FilterSelection::set`].
    #[must_use]
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, Some(value.into()));
        self
    }

    /// Returns the active filters in display order.
    #[must_use]
    pub fn active(&self) -> Vec<(Facet, &str)> {
        Facet::ALL
            .iter()
            .filter_map(|facet| self.get(*facet).map(|value| (*facet, value)))
            .collect()
    }

    /// Returns the number of active filters.
    #[must_use]
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    /// Returns true if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Returns true if the listing satisfies every active filter.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        Facet::ALL.iter().all(|facet| match self.get(*facet) {
            Some(value) => listing.facet_value(*facet) == value,
            None => true,
        })
    }
}

/// Normalizes search text for matching: trimmed and lower-cased.
#[must_use]
pub fn normalize_search(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns true if the listing passes the text predicate.
///
/// `needle` must already be normalized with [`normalize_search`]; an empty
/// needle passes every listing.
#[must_use]
pub fn matches_text(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        listing.name.as_str(),
        listing.category.as_str(),
        listing.city.as_str(),
        listing.neighborhood.as_str(),
        listing.state.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Runs a query over a collection.
///
/// # Arguments
///
/// * `listings` - The normalized collection
/// * `search_text` - Raw search text (trimmed and case-folded here)
/// * `filters` - Facet filters
///
/// # Returns
///
/// The matching listings in collection order.
pub fn query<'a>(
    listings: &'a [Listing],
    search_text: &str,
    filters: &FilterSelection,
) -> Vec<&'a Listing> {
    let needle = normalize_search(search_text);
    let predicate = |listing: &&Listing| matches_text(listing, &needle) && filters.matches(listing);

    if listings.len() >= PARALLEL_THRESHOLD {
        listings.par_iter().filter(predicate).collect()
    } else {
        listings.iter().filter(predicate).collect()
    }
}
