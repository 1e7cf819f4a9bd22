// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir facets` command.

use crate::commands::open_directory;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Prints the distinct categories, cities, neighborhoods and states.
///
/// # Errors
///
/// Returns an error if the directory cannot be opened or is locked.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let directory = open_directory(root)?;
    println!("{}", formatter.format_facets(directory.store.facets()));
    Ok(())
}
