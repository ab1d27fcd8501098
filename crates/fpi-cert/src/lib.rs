//! FPI Certificate System
//!
//! Certificates of conformance for released lots.
//!
//! # Core Concepts
//!
//! - [`CertificateRecord`]: Flat record of who, what, and how much
//! - [`CertificateGenerator`]: Trait for rendering records into documents
//! - [`TextCertificateGenerator`]: Plain-text renderer
//!
//! Generation is invoked once per release and treated as best-effort:
//! the release decision stands even when the document fails.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod generator;
mod record;

// Re-exports
pub use generator::{
    CertificateDocument, CertificateError, CertificateGenerator, TextCertificateGenerator,
};
pub use record::{CertificateId, CertificateRecord};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
