// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir unlock` command.

use crate::OutputFormatter;
use anyhow::Result;
use bizdir_app::{unlock, AppError, DirectoryContext};
use bizdir_core::AccessOutcome;
use std::path::Path;

/// Checks a passphrase and persists access on success.
///
/// # Errors
///
/// Returns an error if:
/// - The directory is not initialized
/// - The passphrase is empty or incorrect
/// - The access flag cannot be written
pub fn execute(
    root: Option<&Path>,
    passphrase: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let context = DirectoryContext::discover(root)?;
    let config = context.load_config()?;
    let mut gate = context.open_gate(&config);

    let message = match unlock(&mut gate, passphrase)? {
        AccessOutcome::Granted => "Access granted",
        AccessOutcome::AlreadyGranted => "Access already granted",
        AccessOutcome::Denied => return Err(AppError::IncorrectPassphrase.into()),
    };

    println!("{}", formatter.format_status(message));
    Ok(())
}
