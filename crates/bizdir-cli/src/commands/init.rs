// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir init` command.
//!
//! Creates the `.bizdir` directory with its configuration, dataset and
//! state directory.

use crate::terminal::print_warning;
use crate::OutputFormatter;
use anyhow::{Context, Result};
use bizdir_app::DirectoryContext;
use bizdir_core::{Config, Dataset, DatasetFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a copied JSON array dataset.
pub const JSON_DATASET: &str = "listings.json";

/// File name of a copied JSON Lines dataset.
pub const JSONL_DATASET: &str = "listings.jsonl";

/// Initializes a business directory.
///
/// Running it again keeps the existing configuration; a new `--dataset`
/// replaces the copied dataset.
///
/// # Arguments
///
/// * `root` - Directory root, or the current directory
/// * `dataset` - Scraped listings file to copy in
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The `.bizdir` directories cannot be created
/// - The dataset file is missing or unreadable
/// - The configuration file cannot be read or written
pub fn execute(
    root: Option<&Path>,
    dataset: Option<PathBuf>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let context = DirectoryContext::at(root)?;
    fs::create_dir_all(context.state_dir()).with_context(|| {
        format!("Failed to create {}", context.state_dir().display())
    })?;

    let mut config = if context.config_path().exists() {
        context.load_config()?
    } else {
        Config::default()
    };

    if let Some(source) = dataset {
        if !source.is_file() {
            anyhow::bail!("Dataset file not found: {}", source.display());
        }
        // Reject unreadable input before replacing the current copy.
        Dataset::new(source.clone())?.load_records()?;

        let file_name = match DatasetFormat::from_path(&source) {
            DatasetFormat::Json => JSON_DATASET,
            DatasetFormat::JsonLines => JSONL_DATASET,
        };
        fs::copy(&source, context.bizdir_dir().join(file_name))
            .with_context(|| format!("Failed to copy dataset {}", source.display()))?;
        config.dataset = PathBuf::from(file_name);
    }

    let dataset_path = context.dataset_path(&config);
    if !dataset_path.exists() {
        fs::write(&dataset_path, "[]\n")?;
    }

    config.validate()?;
    config.save(context.bizdir_dir())?;

    let store = context.load_store(&config)?;
    tracing::info!(
        path = %context.bizdir_dir().display(),
        listings = store.len(),
        "directory initialized"
    );

    if store.is_empty() {
        print_warning("No listings loaded. Run 'bizdir init --dataset FILE' to add some.");
    }

    println!(
        "{}",
        formatter.format_status(&format!(
            "Business directory initialized at {} with {} listings",
            context.bizdir_dir().display(),
            store.len()
        ))
    );

    Ok(())
}
