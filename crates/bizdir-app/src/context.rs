// Rust guideline compliant 2026-02-09

//! Directory discovery and path management utilities.

use crate::error::{AppError, Result};
use bizdir_core::{AccessGate, Config, Dataset, FileFlagStore, ListingStore};
use std::path::{Path, PathBuf};

/// Name of the directory holding configuration, dataset and state.
pub const BIZDIR_DIR: &str = ".bizdir";

/// Name of the state directory inside `.bizdir`.
pub const STATE_DIR: &str = "state";

/// Path metadata for an initialized business directory.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    root: PathBuf,
    bizdir_dir: PathBuf,
    state_dir: PathBuf,
    config_path: PathBuf,
}

impl DirectoryContext {
    /// Discovers a business directory starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional root to pin discovery; defaults to the current directory
    ///
    /// # Returns
    ///
    /// A `DirectoryContext` with resolved paths.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root cannot be resolved
    /// - The `.bizdir` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let context = Self::at(root)?;
        if !context.bizdir_dir.exists() {
            return Err(AppError::DirectoryNotInitialized {
                path: context.bizdir_dir,
            });
        }
        Ok(context)
    }

    /// Resolves the paths for a root without requiring them to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn at(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let bizdir_dir = root.join(BIZDIR_DIR);

        Ok(Self {
            root,
            state_dir: bizdir_dir.join(STATE_DIR),
            config_path: bizdir_dir.join(bizdir_core::config::CONFIG_FILE),
            bizdir_dir,
        })
    }

    /// Returns the directory root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.bizdir` directory path.
    #[must_use]
    pub fn bizdir_dir(&self) -> &Path {
        self.bizdir_dir.as_path()
    }

    /// Returns the state directory path.
    #[must_use]
    pub fn state_dir(&self) -> &Path {
        self.state_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Loads directory configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.bizdir_dir())?)
    }

    /// Returns the dataset path named by the configuration.
    #[must_use]
    pub fn dataset_path(&self, config: &Config) -> PathBuf {
        config.dataset_path(self.bizdir_dir())
    }

    /// Loads and normalizes the configured dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read.
    pub fn load_store(&self, config: &Config) -> Result<ListingStore> {
        let dataset = Dataset::new(self.dataset_path(config))?;
        Ok(dataset.load_store()?)
    }

    /// Opens the access gate for this directory.
    #[must_use]
    pub fn open_gate(&self, config: &Config) -> AccessGate<FileFlagStore> {
        AccessGate::open(
            FileFlagStore::new(self.state_dir()),
            config.access_passphrase.clone(),
        )
    }
}
