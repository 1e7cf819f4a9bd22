// Rust guideline compliant 2026-02-09

//! Access checks shared by front ends.

use crate::error::{AppError, Result};
use bizdir_core::{AccessGate, AccessOutcome, FlagStore};

/// Fails unless the gate has been passed.
///
/// # Errors
///
/// Returns [`AppError::AccessDenied`] while the gate is closed.
pub fn require_access<S: FlagStore>(gate: &AccessGate<S>) -> Result<()> {
    if gate.is_granted() {
        Ok(())
    } else {
        Err(AppError::AccessDenied)
    }
}

/// Checks a passphrase against the gate.
///
/// A wrong passphrase is an expected outcome and is reported as
/// [`AccessOutcome::Denied`], not as an error.
///
/// # Errors
///
/// Returns an error if:
/// - The passphrase is empty
/// - The flag cannot be persisted
pub fn unlock<S: FlagStore>(gate: &mut AccessGate<S>, attempt: &str) -> Result<AccessOutcome> {
    if attempt.is_empty() {
        return Err(AppError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }
    Ok(gate.grant(attempt)?)
}
