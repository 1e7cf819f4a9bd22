// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir list` command.
//!
//! Renders one page of the directory for the given search, filters and
//! page number.

use crate::commands::open_directory;
use crate::terminal::print_warning;
use crate::OutputFormatter;
use anyhow::Result;
use bizdir_app::{browse, unknown_filters, BrowseOptions};
use std::path::Path;

/// Lists businesses.
///
/// A filter value that no listing carries is warned about on stderr and
/// still applied.
///
/// # Arguments
///
/// * `root` - Directory root, or the current directory
/// * `options` - Search text, filters and page
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be opened or is locked
/// - The page number is zero
pub fn execute(
    root: Option<&Path>,
    options: &BrowseOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let directory = open_directory(root)?;
    let page = browse(&directory.store, &directory.config.title, options)?;
    for (facet, value) in unknown_filters(&directory.store, &page.state.filters) {
        print_warning(&format!(
            "No listing has {} '{}'; run 'bizdir facets' to see the choices",
            facet, value
        ));
    }
    println!("{}", formatter.format_page(&page));
    Ok(())
}
