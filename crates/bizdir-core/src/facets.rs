// Rust guideline compliant 2026-02-06

//! Facet extraction for filter choices.

use crate::models::{Facet, Listing};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct, sorted values for each facet dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct categories.
    pub categories: Vec<String>,
    /// Distinct cities.
    pub cities: Vec<String>,
    /// Distinct neighborhoods.
    pub neighborhoods: Vec<String>,
    /// Distinct states.
    pub states: Vec<String>,
}

impl Facets {
    /// Extracts facet values from a normalized collection.
    ///
    /// Values are deduplicated and sorted lexicographically. The
    /// `Uncategorized` sentinel is kept like any other value.
    ///
    /// # Arguments
    ///
    /// * `listings` - The normalized listings
    ///
    /// # Returns
    ///
    /// The facet value sets.
    pub fn extract(listings: &[Listing]) -> Self {
        let distinct = |facet: Facet| -> Vec<String> {
            listings
                .iter()
                .map(|listing| listing.facet_value(facet))
                .collect::<BTreeSet<&str>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            categories: distinct(Facet::Category),
            cities: distinct(Facet::City),
            neighborhoods: distinct(Facet::Neighborhood),
            states: distinct(Facet::State),
        }
    }

    /// Returns the values for one facet dimension.
    #[must_use]
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::City => &self.cities,
            Facet::Neighborhood => &self.neighborhoods,
            Facet::State => &self.states,
        }
    }

    /// Returns true if `value` is one of the choices for `facet`.
    #[must_use]
    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet)
            .binary_search_by(|candidate| candidate.as_str().cmp(value))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNCATEGORIZED;

    fn listing(id: &str, category: &str) -> Listing {
        let mut listing = Listing::new(id, id);
        listing.category = category.to_string();
        listing
    }

    #[test]
    fn test_categories_sorted_and_deduplicated() {
        let listings = vec![
            listing("1", "Bakery"),
            listing("2", "Cafe"),
            listing("3", "Bakery"),
        ];
        let facets = Facets::extract(&listings);
        assert_eq!(facets.categories, vec!["Bakery", "Cafe"]);
    }

    #[test]
    fn test_sentinel_is_a_facet_value() {
        let listings = vec![listing("1", "Bakery")];
        let facets = Facets::extract(&listings);
        assert_eq!(facets.cities, vec![UNCATEGORIZED]);
        assert!(facets.contains(Facet::State, UNCATEGORIZED));
    }

    #[test]
    fn test_empty_collection() {
        let facets = Facets::extract(&[]);
        assert!(facets.categories.is_empty());
        assert!(facets.values(Facet::Neighborhood).is_empty());
    }
}
