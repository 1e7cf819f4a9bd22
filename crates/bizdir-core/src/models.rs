// Rust guideline compliant 2026-02-06

//! Core data models for the business directory.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value substituted for a missing category, city, neighborhood, or state.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Geographic position of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(alias = "lng")]
    pub longitude: f64,
}

/// Opening hours for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    /// Day label as it appears in the dataset (e.g. "Monday").
    pub day: String,
    /// Free-form hours text (e.g. "8 AM to 6 PM", "Closed").
    #[serde(alias = "hours")]
    pub hours_text: String,
}

impl OpeningHours {
    /// Returns true if the hours text marks the day as closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.hours_text.to_lowercase().contains("closed")
    }
}

/// A single attribute property value: either a flag or a free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean property (e.g. `"Debit cards": true`).
    Flag(bool),
    /// Textual property.
    Text(String),
}

impl AttributeValue {
    /// Returns true if the property counts as available.
    ///
    /// A flag is available when set; text is available when non-empty.
    #[must_use]
    pub fn is_available(&self) -> bool {
        match self {
            AttributeValue::Flag(flag) => *flag,
            AttributeValue::Text(text) => !text.is_empty(),
        }
    }
}

/// One property map inside an attribute section, in dataset order.
pub type AttributeEntry = IndexMap<String, AttributeValue>;

/// Attribute sections keyed by section name (e.g. "Payment", "Accessibility"),
/// in dataset order.
pub type Attributes = IndexMap<String, Vec<AttributeEntry>>;

/// The four facet dimensions a listing can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Business category.
    Category,
    /// City.
    City,
    /// Neighborhood (labelled "Area" on filter chips).
    Neighborhood,
    /// State.
    State,
}

impl Facet {
    /// All facets in display order.
    pub const ALL: [Facet; 4] = [
        Facet::Category,
        Facet::City,
        Facet::Neighborhood,
        Facet::State,
    ];

    /// Returns the machine name of the facet.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Category => "category",
            Facet::City => "city",
            Facet::Neighborhood => "neighborhood",
            Facet::State => "state",
        }
    }

    /// Returns the heading used for the facet's value list.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Facet::Category => "Categories",
            Facet::City => "Cities",
            Facet::Neighborhood => "Neighborhoods",
            Facet::State => "States",
        }
    }

    /// Formats an active selection as a filter chip label.
    #[must_use]
    pub fn chip_label(&self, value: &str) -> String {
        match self {
            Facet::Category => value.to_string(),
            Facet::City => format!("City: {}", value),
            Facet::Neighborhood => format!("Area: {}", value),
            Facet::State => format!("State: {}", value),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing record exactly as it appears in a dataset file.
///
/// Every field is optional; both the original scraper field names
/// (`placeId`, `title`, `categoryName`, ...) and the normalized names are
/// accepted. Records are turned into [`Listing`]s by
/// [`crate::normalize::normalize_record`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    #[serde(alias = "placeId")]
    pub id: Option<String>,
    #[serde(alias = "title")]
    pub name: Option<String>,
    #[serde(alias = "categoryName")]
    pub category: Option<String>,
    pub address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    #[serde(alias = "location")]
    pub coordinates: Option<Coordinates>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub phone_unformatted: Option<String>,
    #[serde(alias = "totalScore")]
    pub rating: Option<f64>,
    #[serde(alias = "reviewsCount")]
    pub review_count: Option<u64>,
    #[serde(alias = "openingHours")]
    pub hours: Option<Vec<OpeningHours>>,
    #[serde(alias = "additionalInfo")]
    pub attributes: Option<Attributes>,
}

/// A normalized business listing.
///
/// `category`, `city`, `neighborhood` and `state` always hold either the
/// original value or [`UNCATEGORIZED`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Opaque unique identifier used for lookup and routing.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Business category.
    pub category: String,
    /// Full street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    pub city: String,
    /// Neighborhood.
    pub neighborhood: String,
    /// State.
    pub state: String,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Geographic position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Display phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Phone number without formatting, used for dialing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_unformatted: Option<String>,
    /// Average review score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub review_count: u64,
    /// Opening hours per day, in dataset order.
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
    /// Attribute sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Listing {
    /// Creates a listing with every optional field defaulted.
    ///
    /// # Arguments
    ///
    /// * `id` - The listing identifier
    /// * `name` - The display name
    ///
    /// # Returns
    ///
    /// A listing whose facet fields hold [`UNCATEGORIZED`].
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: UNCATEGORIZED.to_string(),
            address: None,
            city: UNCATEGORIZED.to_string(),
            neighborhood: UNCATEGORIZED.to_string(),
            state: UNCATEGORIZED.to_string(),
            postal_code: None,
            country_code: None,
            coordinates: None,
            website: None,
            phone: None,
            phone_unformatted: None,
            rating: None,
            review_count: 0,
            hours: Vec::new(),
            attributes: None,
        }
    }

    /// Validates the listing data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty
    /// - Name is empty
    /// - A facet field is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidListing(
                "ID cannot be empty".to_string(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(crate::Error::InvalidListing(format!(
                "Name cannot be empty for {}",
                self.id
            )));
        }

        for facet in Facet::ALL {
            if self.facet_value(facet).is_empty() {
                return Err(crate::Error::InvalidListing(format!(
                    "{} cannot be empty for {}",
                    facet, self.id
                )));
            }
        }

        Ok(())
    }

    /// Returns the stored value for a facet dimension.
    #[must_use]
    pub fn facet_value(&self, facet: Facet) -> &str {
        match facet {
            Facet::Category => &self.category,
            Facet::City => &self.city,
            Facet::Neighborhood => &self.neighborhood,
            Facet::State => &self.state,
        }
    }

    /// Returns the short location shown on a directory card.
    ///
    /// The city, unless it is the sentinel and an address is known.
    #[must_use]
    pub fn location_label(&self) -> &str {
        if self.city == UNCATEGORIZED {
            if let Some(address) = self.address.as_deref().filter(|a| !a.is_empty()) {
                return address;
            }
        }
        &self.city
    }
}
