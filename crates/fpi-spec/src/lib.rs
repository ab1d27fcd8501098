//! FPI Static Spec Validator
//!
//! Characteristic specifications with inclusive tolerances, evaluated
//! against entered measurements:
//!
//! - [`InspectionStatus`]: Pending / Pass / Fail with the pure tolerance rule
//! - [`CharacteristicSpec`]: one dimension with bounds, tool, and actual
//! - [`SpecTemplate`]: validated, immutable source of truth for resets
//! - [`SpecSheet`]: working sheet with per-entry recording and fresh
//!   aggregate counts on every read
//!
//! # Example
//!
//! ```rust
//! use fpi_spec::{CharacteristicSpec, SpecId, SpecSheet, SpecTemplate};
//!
//! let template = SpecTemplate::new(vec![
//!     CharacteristicSpec::new(1, "Diameter", "Micrometer", 0.47, 0.53),
//! ])?;
//!
//! let mut sheet = SpecSheet::new(template);
//! sheet.record(SpecId(1), Some(0.50));
//! assert!(sheet.all_passed());
//! # Ok::<(), fpi_spec::TemplateError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod characteristic;
mod sheet;
mod status;
mod template;

// Re-exports
pub use characteristic::{CharacteristicSpec, SpecId};
pub use sheet::{RecordOutcome, SpecSheet, SpecStats};
pub use status::InspectionStatus;
pub use template::{SpecTemplate, TemplateError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with static specifications
    pub use crate::{
        CharacteristicSpec, InspectionStatus, RecordOutcome, SpecId, SpecSheet, SpecStats,
        SpecTemplate,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
