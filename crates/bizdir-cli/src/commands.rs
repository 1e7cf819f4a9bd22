// Rust guideline compliant 2026-02-06

//! Command implementations for the bizdir CLI.

pub mod explore;
pub mod facets;
pub mod init;
pub mod list;
pub mod open;
pub mod show;
pub mod unlock;

use anyhow::Result;
use bizdir_app::{require_access, DirectoryContext};
use bizdir_core::{Config, ListingStore};
use std::path::Path;

/// An initialized, unlocked directory with its listings loaded.
#[derive(Debug)]
pub struct Directory {
    /// Resolved paths.
    pub context: DirectoryContext,
    /// Effective configuration.
    pub config: Config,
    /// Loaded listings.
    pub store: ListingStore,
}

/// Opens the directory at `root` (or the current directory) for browsing.
///
/// # Errors
///
/// Returns an error if:
/// - The `.bizdir` directory does not exist
/// - The configuration is invalid
/// - Access has not been granted
/// - The dataset cannot be read
pub fn open_directory(root: Option<&Path>) -> Result<Directory> {
    let context = DirectoryContext::discover(root)?;
    let config = context.load_config()?;
    require_access(&context.open_gate(&config))?;
    let store = context.load_store(&config)?;

    Ok(Directory {
        context,
        config,
        store,
    })
}
