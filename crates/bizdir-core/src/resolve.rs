// Rust guideline compliant 2026-02-06

//! Selection resolver for the detail view.

use crate::models::Listing;
use crate::{Error, Result};

/// Resolves a listing identifier to its record.
///
/// Lookup is by exact identifier equality.
///
/// # Arguments
///
/// * `listings` - The collection to search
/// * `id` - The opaque listing identifier
///
/// # Returns
///
/// The matching listing.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no listing has the identifier. This is an
/// expected outcome for stale or malformed links.
pub fn resolve<'a>(listings: &'a [Listing], id: &str) -> Result<&'a Listing> {
    listings
        .iter()
        .find(|listing| listing.id == id)
        .ok_or_else(|| Error::NotFound(id.to_string()))
}
