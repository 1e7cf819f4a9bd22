// Rust guideline compliant 2026-02-06

//! The read-only listing store.

use crate::facets::Facets;
use crate::models::Listing;
use crate::normalize::{normalize_all, normalize_listing};
use crate::resolve::resolve;
use crate::Result;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a loaded collection.
///
/// Every load produces a fresh identity; clones of a store share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(u64);

#[derive(Debug)]
struct Inner {
    id: StoreId,
    listings: Vec<Listing>,
    facets: OnceLock<Facets>,
}

/// Immutable, normalized collection of listings.
///
/// Cloning is cheap and shares the underlying collection and its facets.
#[derive(Debug, Clone)]
pub struct ListingStore {
    inner: Arc<Inner>,
}

impl ListingStore {
    /// Builds a store from raw dataset records.
    ///
    /// # Arguments
    ///
    /// * `records` - Raw JSON records in dataset order
    ///
    /// # Returns
    ///
    /// A store holding the normalized listings.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::build(normalize_all(records))
    }

    /// Builds a store from typed listings.
    ///
    /// Blank facet fields receive the sentinel and duplicate identifiers are
    /// dropped, exactly as for dataset records. Listings that still fail
    /// [`Listing::validate`] are skipped with a warning.
    ///
    /// # Arguments
    ///
    /// * `listings` - Listings in display order
    ///
    /// # Returns
    ///
    /// A store holding the normalized listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut seen = HashSet::new();
        let listings = listings
            .into_iter()
            .map(normalize_listing)
            .filter(|listing| match listing.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping invalid listing");
                    false
                }
            })
            .filter(|listing| seen.insert(listing.id.clone()))
            .collect();
        Self::build(listings)
    }

    fn build(listings: Vec<Listing>) -> Self {
        let id = StoreId(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed));
        tracing::info!(count = listings.len(), "listing store loaded");
        Self {
            inner: Arc::new(Inner {
                id,
                listings,
                facets: OnceLock::new(),
            }),
        }
    }

    /// Returns the identity of this collection.
    #[must_use]
    pub fn id(&self) -> StoreId {
        self.inner.id
    }

    /// Returns the listings in dataset order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.inner.listings
    }

    /// Returns the number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.listings.len()
    }

    /// Returns true if the store holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.listings.is_empty()
    }

    /// Returns the facet values, extracting them on first use.
    #[must_use]
    pub fn facets(&self) -> &Facets {
        self.inner
            .facets
            .get_or_init(|| Facets::extract(&self.inner.listings))
    }

    /// Looks up a listing by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if no listing has the identifier.
    pub fn resolve(&self, id: &str) -> Result<&Listing> {
        resolve(self.listings(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNCATEGORIZED;
    use serde_json::json;

    #[test]
    fn test_clones_share_identity_and_facets() {
        let store = ListingStore::from_records(vec![json!({"id": "a", "name": "A"})]);
        let clone = store.clone();
        assert_eq!(store.id(), clone.id());
        assert!(std::ptr::eq(store.facets(), clone.facets()));
    }

    #[test]
    fn test_each_load_has_new_identity() {
        let first = ListingStore::from_listings(Vec::new());
        let second = ListingStore::from_listings(Vec::new());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_from_listings_normalizes() {
        let mut listing = Listing::new("a", "A");
        listing.state = " ".to_string();
        let duplicate = Listing::new("a", "Again");
        let store = ListingStore::from_listings(vec![listing, duplicate]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.listings()[0].state, UNCATEGORIZED);
        assert_eq!(store.listings()[0].name, "A");
    }

    #[test]
    fn test_from_listings_skips_invalid() {
        let store = ListingStore::from_listings(vec![
            Listing::new(" ", "No Id"),
            Listing::new("b", ""),
            Listing::new("c", "C"),
        ]);
        let ids: Vec<&str> = store.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }
}
