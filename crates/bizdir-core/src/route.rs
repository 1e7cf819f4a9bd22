// Rust guideline compliant 2026-02-06

//! Navigation routes for the directory and detail views.

use crate::{Error, Result};
use std::fmt;

/// Path prefix of the detail view.
const DETAIL_PREFIX: &str = "business";

/// An addressable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The searchable directory (`/`).
    Directory,
    /// The detail view of one listing (`/business/{id}`).
    Detail(String),
}

impl Route {
    /// Parses a location path into a route.
    ///
    /// Query strings and fragments are ignored, as is a trailing slash. The
    /// detail identifier is percent-decoded and otherwise treated as opaque.
    ///
    /// # Arguments
    ///
    /// * `path` - The location path
    ///
    /// # Returns
    ///
    /// The matching route.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path matches no view
    /// - The identifier is empty or does not decode to UTF-8
    pub fn parse(path: &str) -> Result<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            return Ok(Route::Directory);
        }

        let rest = path.strip_prefix('/').unwrap_or(path);
        let mut segments = rest.splitn(2, '/');
        match (segments.next(), segments.next()) {
            (Some(DETAIL_PREFIX), Some(token)) if !token.is_empty() && !token.contains('/') => {
                let id = urlencoding::decode(token)
                    .map_err(|err| Error::InvalidRoute(format!("{}: {}", path, err)))?;
                Ok(Route::Detail(id.into_owned()))
            }
            _ => Err(Error::InvalidRoute(path.to_string())),
        }
    }

    /// Formats the route as a location path.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Route::Directory => "/".to_string(),
            Route::Detail(id) => format!("/{}/{}", DETAIL_PREFIX, urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
