//! # gateway-inspect
//!
//! Read-only introspection queries over a service gateway's live metadata.
//!
//! The query layer answers one question:
//!
//! > Which endpoints, services, configuration values, and environment
//! > variables does this gateway process carry **right now**?
//!
//! ## Core Contract
//!
//! 1. Recognized filter parameters compose with AND semantics; unknown
//!    parameters are ignored, never errors
//! 2. Results carry a deterministic total order (composite string keys)
//! 3. Pagination is bounds-safe: a page past the end is empty, not an error
//!
//! ## Architecture
//!
//! ```text
//! QueryParams → Predicate Composer → Two-Level Pipeline → Sort → Page
//!                      ↓
//!             MetadataRegistry (read-only gateway snapshot)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Identical query + unchanged registry snapshot → byte-identical output
//! - Sort keys compare byte-wise; the sort is stable for duplicate keys
//! - Filtering is monotone: every filtered result is a subset of the
//!   unfiltered result

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fingerprint;
pub mod matching;
pub mod order;
pub mod page;
pub mod registry;
pub mod stats;
pub mod types;

#[cfg(feature = "service")]
pub mod service;

// Re-exports
pub use types::{Endpoint, EndpointGroup, QueryParams, ServiceRecord};
pub use config::ConfigSnapshot;
pub use engine::{
    ConfigResponse, EndpointStats, EnvResponse, PagedResponse, QueryEngine, ServiceStats,
    StatsResponse,
};
pub use error::InspectError;
pub use filter::pipeline::{filter_flat, filter_two_level};
pub use filter::{ActiveFilters, BoundFilter, FilterFn, FilterRegistry};
pub use fingerprint::fingerprint;
pub use order::{sort_deterministic, OrderKey};
pub use page::PageSpec;
pub use registry::{InMemoryRegistry, MetadataRegistry, RegistrySeed};

// Service re-exports (when the service feature is enabled)
#[cfg(feature = "service")]
pub use service::{create_router, ServiceState};

/// Schema version for all response payloads.
/// Increment on breaking changes to any response shape.
pub const INSPECT_SCHEMA_VERSION: &str = "1.0.0";
