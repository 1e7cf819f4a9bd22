// Rust guideline compliant 2026-02-09

//! Shared application services for bizdir.
//!
//! This crate provides reusable, non-CLI-specific helpers for directory
//! discovery, access checks, directory and detail page assembly, the
//! interactive browse session, and standardized response envelopes.

pub mod access;
pub mod browse;
pub mod context;
pub mod detail;
pub mod error;
pub mod response;
pub mod session;

pub use access::{require_access, unlock};
pub use browse::{
    browse, filter_chips, parse_facet, summary_line, unknown_filters, BrowseOptions,
    DirectoryPage, FilterChip, ListingCard,
};
pub use context::DirectoryContext;
pub use detail::{lookup, DetailOutcome, DetailView, NotFoundView};
pub use error::{AppError, ErrorCode, Result};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use session::{BrowseSession, Destination, SessionCommand};
