// Rust guideline compliant 2026-02-06

//! bizdir Core Library
//!
//! This crate provides the foundational components of the business directory:
//! - Data models (Listing, Facet, attributes) and one-time normalization
//! - Dataset loading (JSON array or JSON Lines)
//! - Facet extraction, query engine and paginator
//! - Browse state machine and memoized view derivation
//! - Selection resolver, routes and outbound links
//! - Access gate with a persisted flag
//! - Configuration, error types and result handling

pub mod browse;
pub mod config;
pub mod dataset;
pub mod error;
pub mod facets;
pub mod gate;
pub mod links;
pub mod models;
pub mod normalize;
pub mod paginate;
pub mod query;
pub mod resolve;
pub mod route;
pub mod store;
pub mod view;

pub use browse::{BrowseAction, BrowseState, Effect};
pub use config::{Config, OutputFormat};
pub use dataset::{Dataset, DatasetFormat};
pub use error::{Error, Result};
pub use facets::Facets;
pub use gate::{AccessGate, AccessOutcome, FileFlagStore, FlagStore, MemoryFlagStore};
pub use links::OutboundLinks;
pub use models::{AttributeValue, Coordinates, Facet, Listing, OpeningHours, UNCATEGORIZED};
pub use paginate::{paginate, Page, PageMarker, PageNavigation, PAGE_SIZE};
pub use query::{query, FilterSelection};
pub use resolve::resolve;
pub use route::Route;
pub use store::{ListingStore, StoreId};
pub use view::{derive_view, DirectoryView, ViewCache};
