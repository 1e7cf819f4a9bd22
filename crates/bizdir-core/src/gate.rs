// Rust guideline compliant 2026-02-06

//! Access gate backed by a single persisted flag.
//!
//! The gate is a session value created at startup from a [`FlagStore`]. It
//! moves to "granted" at most once, on a successful passphrase check, and is
//! never reset afterwards.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Namespaced key under which the access flag is persisted.
pub const ACCESS_FLAG_KEY: &str = "business-directory-auth";

/// Storage for the access flag.
pub trait FlagStore {
    /// Reads the persisted flag; absent storage reads as `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage exists but cannot be read.
    fn load_flag(&self) -> Result<bool>;

    /// Persists the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be written.
    fn save_flag(&self, granted: bool) -> Result<()>;
}

/// File-backed flag store.
///
/// The flag lives in a file named [`ACCESS_FLAG_KEY`] holding `true` or
/// `false`.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    /// Creates a store for the flag file inside `state_dir`.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(ACCESS_FLAG_KEY),
        }
    }

    /// Returns the flag file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlagStore for FileFlagStore {
    fn load_flag(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.trim() == "true")
    }

    fn save_flag(&self, granted: bool) -> Result<()> {
        use fs2::FileExt;
        use std::fs::OpenOptions;
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)?;

        file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let content: &[u8] = if granted { b"true" } else { b"false" };
        let result = file
            .set_len(0)
            .and_then(|_| file.write_all(content))
            .and_then(|_| file.sync_all());

        let _ = file.unlock();

        Ok(result?)
    }
}

/// In-memory flag store for tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flag: AtomicBool,
}

impl MemoryFlagStore {
    /// Creates a store holding `granted`.
    pub fn new(granted: bool) -> Self {
        Self {
            flag: AtomicBool::new(granted),
        }
    }
}

impl FlagStore for MemoryFlagStore {
    fn load_flag(&self) -> Result<bool> {
        Ok(self.flag.load(Ordering::Relaxed))
    }

    fn save_flag(&self, granted: bool) -> Result<()> {
        self.flag.store(granted, Ordering::Relaxed);
        Ok(())
    }
}

/// Result of a passphrase check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The passphrase matched and access was granted now.
    Granted,
    /// Access had already been granted; the passphrase was not checked.
    AlreadyGranted,
    /// The passphrase did not match.
    Denied,
}

/// Session access state.
#[derive(Debug)]
pub struct AccessGate<S: FlagStore> {
    store: S,
    passphrase: String,
    granted: bool,
}

impl<S: FlagStore> AccessGate<S> {
    /// Opens the gate, reading the persisted flag.
    ///
    /// An unreadable flag is treated as not granted.
    ///
    /// # Arguments
    ///
    /// * `store` - Flag storage
    /// * `passphrase` - The expected passphrase
    pub fn open(store: S, passphrase: impl Into<String>) -> Self {
        let granted = store.load_flag().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "access flag unreadable, treating as locked");
            false
        });
        Self {
            store,
            passphrase: passphrase.into(),
            granted,
        }
    }

    /// Returns true if access has been granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Checks a passphrase and grants access on a match.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The passphrase entered by the user
    ///
    /// # Returns
    ///
    /// The outcome of the check.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted; the gate stays
    /// locked in that case.
    pub fn grant(&mut self, attempt: &str) -> Result<AccessOutcome> {
        if self.granted {
            return Ok(AccessOutcome::AlreadyGranted);
        }

        if attempt != self.passphrase {
            tracing::info!("access denied");
            return Ok(AccessOutcome::Denied);
        }

        self.store.save_flag(true)?;
        self.granted = true;
        tracing::info!("access granted");
        Ok(AccessOutcome::Granted)
    }
}
