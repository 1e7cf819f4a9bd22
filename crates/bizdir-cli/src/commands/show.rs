// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir show` command.

use crate::commands::open_directory;
use crate::OutputFormatter;
use anyhow::Result;
use bizdir_app::lookup;
use std::path::Path;

/// Shows the detail view of a business.
///
/// An unknown ID renders the not-found view and is not an error.
///
/// # Errors
///
/// Returns an error if the directory cannot be opened or is locked.
pub fn execute(root: Option<&Path>, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let directory = open_directory(root)?;
    println!("{}", formatter.format_detail(&lookup(&directory.store, id)));
    Ok(())
}
