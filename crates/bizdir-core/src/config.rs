// Rust guideline compliant 2026-02-06

//! Configuration management for bizdir.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the `.bizdir` directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            other => Err(Error::InvalidConfig(format!(
                "output format must be json, table, or plain, got {}",
                other
            ))),
        }
    }
}

/// Configuration for a business directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file, relative to the `.bizdir` directory unless absolute.
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,

    /// Directory title shown in headers.
    #[serde(default = "default_title")]
    pub title: String,

    /// Passphrase expected by the access gate.
    #[serde(default = "default_passphrase")]
    pub access_passphrase: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Default log level (error, warn, info or debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_dataset() -> PathBuf {
    PathBuf::from("listings.json")
}

fn default_title() -> String {
    "FibreX Directory".to_string()
}

fn default_passphrase() -> String {
    "123456".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            title: default_title(),
            access_passphrase: default_passphrase(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.bizdir/config.toml`
    /// 3. Environment variables with `BIZDIR_` prefix
    ///
    /// # Arguments
    ///
    /// * `bizdir_dir` - Path to the `.bizdir` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(bizdir_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = bizdir_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BIZDIR_DATASET` - Dataset file
    /// - `BIZDIR_TITLE` - Directory title
    /// - `BIZDIR_ACCESS_PASSPHRASE` - Access passphrase
    /// - `BIZDIR_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `BIZDIR_LOG_LEVEL` - Log level (error/warn/info/debug)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("BIZDIR_DATASET") {
            self.dataset = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("BIZDIR_TITLE") {
            self.title = val;
        }

        if let Ok(val) = std::env::var("BIZDIR_ACCESS_PASSPHRASE") {
            self.access_passphrase = val;
        }

        if let Ok(val) = std::env::var("BIZDIR_OUTPUT_FORMAT") {
            self.output_format = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "BIZDIR_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("BIZDIR_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - dataset is empty
    /// - access_passphrase is empty
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.dataset.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("dataset must not be empty".to_string()));
        }

        if self.access_passphrase.is_empty() {
            return Err(Error::InvalidConfig(
                "access_passphrase must not be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Resolves the dataset path against the `.bizdir` directory.
    #[must_use]
    pub fn dataset_path(&self, bizdir_dir: &Path) -> PathBuf {
        if self.dataset.is_absolute() {
            self.dataset.clone()
        } else {
            bizdir_dir.join(&self.dataset)
        }
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `bizdir_dir` - Path to the `.bizdir` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, bizdir_dir: &Path) -> Result<()> {
        let config_path = bizdir_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::remove_var("BIZDIR_DATASET");
        std::env::remove_var("BIZDIR_TITLE");
        std::env::remove_var("BIZDIR_ACCESS_PASSPHRASE");
        std::env::remove_var("BIZDIR_OUTPUT_FORMAT");
        std::env::remove_var("BIZDIR_LOG_LEVEL");
        guard
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset, PathBuf::from("listings.json"));
        assert_eq!(config.title, "FibreX Directory");
        assert_eq!(config.access_passphrase, "123456");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
dataset = "lagos.jsonl"
title = "Lagos Eats"
access_passphrase = "jollof"
output_format = "json"
log_level = "debug"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.dataset, PathBuf::from("lagos.jsonl"));
        assert_eq!(config.title, "Lagos Eats");
        assert_eq!(config.access_passphrase, "jollof");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_validation_empty_passphrase() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "access_passphrase = \"\"").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_unknown_log_level() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = \"trace\"").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "title = ").unwrap();
        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_config_env_overrides() {
        let guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("BIZDIR_TITLE", "Abuja Directory");
        std::env::set_var("BIZDIR_ACCESS_PASSPHRASE", "secret");
        std::env::set_var("BIZDIR_OUTPUT_FORMAT", "plain");
        std::env::set_var("BIZDIR_LOG_LEVEL", "INFO");
        std::env::set_var("BIZDIR_DATASET", "/data/abuja.json");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.title, "Abuja Directory");
        assert_eq!(config.access_passphrase, "secret");
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.dataset_path(temp_dir.path()),
            PathBuf::from("/data/abuja.json")
        );

        drop(guard);
        let _guard = clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_format() {
        let guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("BIZDIR_OUTPUT_FORMAT", "invalid");
        assert!(Config::load(temp_dir.path()).is_err());

        drop(guard);
        let _guard = clear_all_env_vars();
    }

    #[test]
    fn test_dataset_path_is_relative_to_dir() {
        let config = Config::default();
        assert_eq!(
            config.dataset_path(Path::new("/srv/.bizdir")),
            PathBuf::from("/srv/.bizdir/listings.json")
        );
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            title: "Saved".to_string(),
            output_format: OutputFormat::Json,
            ..Config::default()
        };

        config.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
