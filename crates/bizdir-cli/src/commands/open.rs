// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir open` command.
//!
//! Navigates by route path: `/` for the directory and `/business/{id}` for
//! a detail view.

use crate::commands::open_directory;
use crate::OutputFormatter;
use anyhow::Result;
use bizdir_app::{BrowseSession, Destination};
use std::path::Path;

/// Renders the view a route path points at.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be opened or is locked
/// - The path matches no view
pub fn execute(root: Option<&Path>, path: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let directory = open_directory(root)?;
    let mut session = BrowseSession::new(directory.store, directory.config.title);

    let output = match session.open(path)? {
        Destination::Directory(page) => formatter.format_page(&page),
        Destination::Detail(outcome) => formatter.format_detail(&outcome),
    };
    println!("{}", output);
    Ok(())
}
