//! FPI Configuration System
//!
//! Per-part inspection checklists and the catalog store behind them.
//!
//! # Core Concepts
//!
//! - [`PartConfig`]: One part's checklist, header, and revision
//! - [`PartStore`]: In-memory catalog with a best-effort JSON file behind it
//! - [`demo_catalog`]: Built-in fallback when nothing persisted loads
//!
//! The store never lets the backing file take a session down: corrupt
//! catalogs fall back to the demo seed and failed writes are logged and
//! dropped.

mod part;
mod store;

// Re-exports
pub use part::{demo_catalog, ConfigError, PartConfig};
pub use store::PartStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
