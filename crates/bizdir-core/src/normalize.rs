// Rust guideline compliant 2026-02-06

//! One-time normalization of dataset records into listings.
//!
//! Normalization is a pure transform from raw records to a new collection:
//! missing or blank `category`, `city`, `neighborhood` and `state` values are
//! replaced with [`UNCATEGORIZED`], duplicate identifiers are dropped (first
//! wins), and records that fail typed decoding are salvaged rather than
//! aborting the load.

use crate::models::{Listing, ListingRecord, UNCATEGORIZED};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Normalizes a decoded dataset record.
///
/// # Arguments
///
/// * `record` - The raw record
///
/// # Returns
///
/// A listing with sentinel values in place of missing facet fields.
///
/// # Errors
///
/// Returns an error if the record has no usable identifier.
pub fn normalize_record(record: ListingRecord) -> Result<Listing> {
    let id = non_blank(record.id)
        .ok_or_else(|| Error::InvalidListing("record has no identifier".to_string()))?;
    let name = match non_blank(record.name) {
        Some(name) => name,
        None => {
            tracing::warn!(id = %id, "listing has no name, using its identifier");
            id.clone()
        }
    };

    Ok(Listing {
        name,
        category: or_sentinel(record.category),
        address: non_blank(record.address).or_else(|| non_blank(record.street)),
        city: or_sentinel(record.city),
        neighborhood: or_sentinel(record.neighborhood),
        state: or_sentinel(record.state),
        postal_code: non_blank(record.postal_code),
        country_code: non_blank(record.country_code),
        coordinates: record.coordinates,
        website: non_blank(record.website),
        phone: non_blank(record.phone),
        phone_unformatted: non_blank(record.phone_unformatted),
        rating: record.rating.filter(|r| r.is_finite()),
        review_count: record.review_count.unwrap_or(0),
        hours: record.hours.unwrap_or_default(),
        attributes: record.attributes,
        id,
    })
}

/// Normalizes an untyped dataset record.
///
/// Records that do not decode as a [`ListingRecord`] keep only their
/// identifier and name; every optional field takes its default.
///
/// # Arguments
///
/// * `value` - The raw JSON record
///
/// # Returns
///
/// The normalized listing, or `None` if no identifier can be recovered.
pub fn normalize_value(value: Value) -> Option<Listing> {
    let salvage = salvage_identity(&value);

    let decoded = serde_json::from_value::<ListingRecord>(value)
        .map_err(Error::from)
        .and_then(normalize_record);

    match decoded {
        Ok(listing) => Some(listing),
        Err(err) => match salvage {
            Some((id, name)) => {
                tracing::warn!(id = %id, error = %err, "salvaging malformed listing record");
                Some(Listing::new(id.clone(), name.unwrap_or(id)))
            }
            None => {
                tracing::warn!(error = %err, "skipping listing record without identifier");
                None
            }
        },
    }
}

/// Normalizes a whole collection, preserving input order.
///
/// # Arguments
///
/// * `records` - Raw JSON records in dataset order
///
/// # Returns
///
/// The normalized listings with duplicate identifiers removed.
pub fn normalize_all<I>(records: I) -> Vec<Listing>
where
    I: IntoIterator<Item = Value>,
{
    let mut seen = HashSet::new();
    let mut listings = Vec::new();

    for listing in records.into_iter().filter_map(normalize_value) {
        if seen.insert(listing.id.clone()) {
            listings.push(listing);
        } else {
            tracing::warn!(id = %listing.id, "skipping duplicate listing identifier");
        }
    }

    listings
}

/// Re-applies sentinel defaults to an already typed listing.
///
/// Used when listings are constructed in code rather than decoded from a
/// dataset.
#[must_use]
pub fn normalize_listing(mut listing: Listing) -> Listing {
    for field in [
        &mut listing.category,
        &mut listing.city,
        &mut listing.neighborhood,
        &mut listing.state,
    ] {
        if field.trim().is_empty() {
            *field = UNCATEGORIZED.to_string();
        }
    }
    listing
}

fn salvage_identity(value: &Value) -> Option<(String, Option<String>)> {
    let field = |names: &[&str]| {
        names
            .iter()
            .filter_map(|name| value.get(*name).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    };

    let id = field(&["id", "placeId"])?;
    Some((id, field(&["name", "title"])))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_sentinel(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| UNCATEGORIZED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_facets_receive_sentinel() {
        let listing = normalize_value(json!({"placeId": "p1", "title": "Shop"})).unwrap();
        assert_eq!(listing.category, UNCATEGORIZED);
        assert_eq!(listing.city, UNCATEGORIZED);
        assert_eq!(listing.neighborhood, UNCATEGORIZED);
        assert_eq!(listing.state, UNCATEGORIZED);
        assert_eq!(listing.review_count, 0);
        assert!(listing.hours.is_empty());
    }

    #[test]
    fn test_street_stands_in_for_missing_address() {
        let listing =
            normalize_value(json!({"id": "p1", "name": "Shop", "street": "4 Broad St"})).unwrap();
        assert_eq!(listing.address.as_deref(), Some("4 Broad St"));

        let listing = normalize_value(
            json!({"id": "p2", "name": "Shop", "address": "4 Broad St, Lagos", "street": "4 Broad St"}),
        )
        .unwrap();
        assert_eq!(listing.address.as_deref(), Some("4 Broad St, Lagos"));
    }

    #[test]
    fn test_blank_facets_receive_sentinel() {
        let listing =
            normalize_value(json!({"id": "p1", "name": "Shop", "city": "  ", "state": ""}))
                .unwrap();
        assert_eq!(listing.city, UNCATEGORIZED);
        assert_eq!(listing.state, UNCATEGORIZED);
    }

    #[test]
    fn test_present_values_are_kept() {
        let listing = normalize_value(json!({
            "id": "p1",
            "name": "Shop",
            "category": "Bakery",
            "city": "Ikeja",
            "neighborhood": "Allen",
            "state": "Lagos"
        }))
        .unwrap();
        assert_eq!(listing.category, "Bakery");
        assert_eq!(listing.city, "Ikeja");
        assert_eq!(listing.neighborhood, "Allen");
        assert_eq!(listing.state, "Lagos");
    }

    #[test]
    fn test_malformed_record_is_salvaged() {
        let listing = normalize_value(json!({
            "placeId": "p1",
            "title": "Shop",
            "categoryName": "Bakery",
            "totalScore": "not a number"
        }))
        .unwrap();
        assert_eq!(listing.id, "p1");
        assert_eq!(listing.name, "Shop");
        assert_eq!(listing.category, UNCATEGORIZED);
        assert_eq!(listing.rating, None);
    }

    #[test]
    fn test_record_without_identifier_is_skipped() {
        assert!(normalize_value(json!({"title": "Nameless"})).is_none());
        assert!(normalize_value(json!("just a string")).is_none());
    }

    #[test]
    fn test_missing_name_uses_identifier() {
        let listing = normalize_value(json!({"id": "p1"})).unwrap();
        assert_eq!(listing.name, "p1");
    }

    #[test]
    fn test_duplicates_keep_first() {
        let listings = normalize_all(vec![
            json!({"id": "p1", "name": "First"}),
            json!({"id": "p2", "name": "Other"}),
            json!({"id": "p1", "name": "Second"}),
        ]);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name, "First");
        assert_eq!(listings[1].id, "p2");
    }

    #[test]
    fn test_normalize_listing_fills_blank_fields() {
        let mut listing = Listing::new("p1", "Shop");
        listing.city = String::new();
        let listing = normalize_listing(listing);
        assert_eq!(listing.city, UNCATEGORIZED);
    }
}
