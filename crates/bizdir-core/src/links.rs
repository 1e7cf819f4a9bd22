// Rust guideline compliant 2026-02-06

//! Outbound links derived from a listing.

use crate::models::{Coordinates, Listing};
use serde::Serialize;

/// Base URL of the web-map search link.
pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Call, map and website links for a listing.
///
/// Each link is present only when the field it is built from is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutboundLinks {
    /// `tel:` link built from the unformatted phone number, or the display
    /// number when the dataset has no unformatted one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Web-map link built from the coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    /// The listing's website, passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl OutboundLinks {
    /// Builds the links for a listing.
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            phone: listing
                .phone_unformatted
                .as_deref()
                .or(listing.phone.as_deref())
                .map(phone_link),
            map: listing.coordinates.as_ref().map(map_link),
            website: listing.website.clone(),
        }
    }

    /// Returns true if no link is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.map.is_none() && self.website.is_none()
    }
}

/// Formats a telephone link.
#[must_use]
pub fn phone_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Formats a web-map search link for a position.
#[must_use]
pub fn map_link(coordinates: &Coordinates) -> String {
    format!(
        "{}{},{}",
        MAP_SEARCH_URL, coordinates.latitude, coordinates.longitude
    )
}
