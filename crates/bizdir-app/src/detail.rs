// Rust guideline compliant 2026-02-09

//! Detail view assembly for a single listing.

use bizdir_core::models::{AttributeValue, Attributes};
use bizdir_core::{Listing, ListingStore, OutboundLinks, Route};
use serde::Serialize;

/// Number of stars in the rating row.
pub const STAR_COUNT: u8 = 5;

/// Heading of the not-found view.
pub const NOT_FOUND_TITLE: &str = "Business Not Found";

/// Label of the not-found view's way back.
pub const RETURN_LABEL: &str = "Return to Directory";

/// Rating stars, `filled` out of [`STAR_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRow {
    /// Filled stars: the rating rounded down.
    pub filled: u8,
    /// Total stars.
    pub total: u8,
}

impl StarRow {
    /// Builds the star row for a rating.
    #[must_use]
    pub fn for_rating(rating: f64) -> Self {
        let filled = rating.floor().clamp(0.0, f64::from(STAR_COUNT)) as u8;
        Self {
            filled,
            total: STAR_COUNT,
        }
    }
}

/// One opening-hours row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursRow {
    /// Day label.
    pub day: String,
    /// Hours text as published.
    pub hours: String,
    /// Whether the business is closed that day.
    pub closed: bool,
}

/// Kind of attribute section, chosen from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Payment options.
    Payment,
    /// Accessibility features.
    Accessibility,
    /// Anything else.
    Other,
}

impl SectionKind {
    /// Classifies a section by case-insensitive substring of its name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("payment") {
            SectionKind::Payment
        } else if name.contains("accessibility") {
            SectionKind::Accessibility
        } else {
            SectionKind::Other
        }
    }
}

/// One attribute property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeRow {
    /// Property name.
    pub label: String,
    /// Whether the property is available.
    pub available: bool,
}

impl AttributeRow {
    /// Returns the availability label.
    #[must_use]
    pub fn status(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }
}

/// A named group of attribute properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSection {
    /// Section name as published.
    pub name: String,
    /// Section kind.
    pub kind: SectionKind,
    /// Properties in published order.
    pub rows: Vec<AttributeRow>,
}

/// Everything the detail page shows for a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    /// The listing.
    pub listing: Listing,
    /// Path of this view.
    pub route: String,
    /// Call, map and website links.
    pub links: OutboundLinks,
    /// Rating stars, when the listing has a rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<StarRow>,
    /// Opening hours.
    pub hours: Vec<HoursRow>,
    /// Attribute sections.
    pub sections: Vec<AttributeSection>,
}

impl DetailView {
    /// Builds the detail view for a listing.
    #[must_use]
    pub fn build(listing: &Listing) -> Self {
        Self {
            route: Route::Detail(listing.id.clone()).to_path(),
            links: OutboundLinks::for_listing(listing),
            stars: listing.rating.map(StarRow::for_rating),
            hours: listing
                .hours
                .iter()
                .map(|entry| HoursRow {
                    day: entry.day.clone(),
                    hours: entry.hours_text.clone(),
                    closed: entry.is_closed(),
                })
                .collect(),
            sections: listing
                .attributes
                .as_ref()
                .map(attribute_sections)
                .unwrap_or_default(),
            listing: listing.clone(),
        }
    }
}

fn attribute_sections(attributes: &Attributes) -> Vec<AttributeSection> {
    attributes
        .iter()
        .map(|(name, entries)| AttributeSection {
            name: name.clone(),
            kind: SectionKind::classify(name),
            rows: entries
                .iter()
                .flat_map(|entry| entry.iter())
                .map(|(label, value)| AttributeRow {
                    label: label.clone(),
                    available: AttributeValue::is_available(value),
                })
                .collect(),
        })
        .collect()
}

/// The view shown for an unknown identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    /// The identifier that was requested.
    pub id: String,
    /// Heading.
    pub title: &'static str,
    /// Label of the way back.
    pub action: &'static str,
    /// Path of the way back.
    pub action_route: String,
}

impl NotFoundView {
    /// Builds the not-found view for an identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: NOT_FOUND_TITLE,
            action: RETURN_LABEL,
            action_route: Route::Directory.to_path(),
        }
    }
}

/// Outcome of a detail lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailOutcome {
    /// The listing exists.
    Found(DetailView),
    /// No listing has the identifier.
    NotFound(NotFoundView),
}

/// Looks up a listing and builds its detail view.
///
/// An unknown identifier is an expected outcome and yields
/// [`DetailOutcome::NotFound`].
#[must_use]
pub fn lookup(store: &ListingStore, id: &str) -> DetailOutcome {
    match store.resolve(id) {
        Ok(listing) => DetailOutcome::Found(DetailView::build(listing)),
        Err(_) => {
            tracing::info!(id = %id, "listing not found");
            DetailOutcome::NotFound(NotFoundView::new(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> ListingStore {
        ListingStore::from_records(vec![json!({
            "placeId": "ChIJ-1",
            "title": "Mama Put",
            "totalScore": 4.7,
            "phone": "+234 803 000 0000",
            "location": {"lat": 6.6, "lng": 3.35},
            "openingHours": [
                {"day": "Saturday", "hours": "9 AM to 5 PM"},
                {"day": "Sunday", "hours": "CLOSED"}
            ],
            "additionalInfo": {
                "Payments": [{"Debit cards": true}, {"Mobile payments": "NFC"}],
                "Accessibility": [{"Wheelchair accessible entrance": false}],
                "Service options": [{"Takeout": true, "Delivery": ""}]
            }
        })])
    }

    fn found(outcome: DetailOutcome) -> DetailView {
        match outcome {
            DetailOutcome::Found(view) => view,
            DetailOutcome::NotFound(_) => panic!("expected a listing"),
        }
    }

    #[test]
    fn test_detail_view_contents() {
        let view = found(lookup(&store(), "ChIJ-1"));
        assert_eq!(view.route, "/business/ChIJ-1");
        assert_eq!(view.stars, Some(StarRow { filled: 4, total: 5 }));
        assert_eq!(view.links.phone.as_deref(), Some("tel:+234 803 000 0000"));
        assert!(view.links.map.is_some());
        assert!(!view.hours[0].closed);
        assert!(view.hours[1].closed);
    }

    #[test]
    fn test_attribute_sections_are_classified() {
        let view = found(lookup(&store(), "ChIJ-1"));
        let kinds: Vec<(&str, SectionKind)> = view
            .sections
            .iter()
            .map(|s| (s.name.as_str(), s.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("Payments", SectionKind::Payment),
                ("Accessibility", SectionKind::Accessibility),
                ("Service options", SectionKind::Other),
            ]
        );

        let payments = &view.sections[0].rows;
        assert_eq!(payments[0].status(), "Available");
        assert_eq!(payments[1].status(), "Available");
        assert_eq!(view.sections[1].rows[0].status(), "Not Available");

        let services: Vec<(&str, bool)> = view.sections[2]
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.available))
            .collect();
        assert_eq!(services, vec![("Takeout", true), ("Delivery", false)]);
    }

    #[test]
    fn test_attribute_order_follows_dataset() {
        let store = ListingStore::from_records(vec![json!({
            "placeId": "ChIJ-2",
            "title": "Corner Shop",
            "additionalInfo": {
                "Service options": [{"Takeout": true}, {"Delivery": true}, {"Dine-in": false}],
                "Accessibility": [{"Wheelchair accessible entrance": true}]
            }
        })]);
        let view = found(lookup(&store, "ChIJ-2"));

        let names: Vec<&str> = view.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Service options", "Accessibility"]);
        let rows: Vec<&str> = view.sections[0].rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(rows, vec!["Takeout", "Delivery", "Dine-in"]);

        let listing = serde_json::to_value(&view.listing).unwrap();
        let keys: Vec<&String> = listing["attributes"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Service options", "Accessibility"]);
    }

    #[test]
    fn test_unknown_id_yields_not_found_view() {
        match lookup(&store(), "unknown-id") {
            DetailOutcome::NotFound(view) => {
                assert_eq!(view.title, "Business Not Found");
                assert_eq!(view.action, "Return to Directory");
                assert_eq!(view.action_route, "/");
            }
            DetailOutcome::Found(_) => panic!("expected not found"),
        }
    }

    #[test]
    fn test_star_row_bounds() {
        assert_eq!(StarRow::for_rating(0.4).filled, 0);
        assert_eq!(StarRow::for_rating(5.0).filled, 5);
        assert_eq!(StarRow::for_rating(7.2).filled, 5);
    }
}
