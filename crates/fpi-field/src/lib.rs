//! FPI Field System
//!
//! Typed inspection fields for part-driven first-piece inspection.
//!
//! # Core Concepts
//!
//! - [`FieldKind`]: Closed set of field types (numeric, checkbox, select),
//!   each with its own validation rule
//! - [`FieldDefinition`]: Per-part configuration row describing one field
//! - [`FieldValue`]: Raw value entered by the inspector
//! - [`InspectionForm`]: Recorded entries with evaluated statuses
//! - [`evaluate`]: Exhaustive rule dispatch, total over kind/value pairs
//!
//! # Example
//!
//! ```rust
//! use fpi_field::{FieldDefinition, FieldKind, FieldValue, InspectionForm};
//!
//! let od = FieldDefinition::new(
//!     "od",
//!     "Outer Diameter",
//!     FieldKind::Numeric { min: Some(0.47), max: Some(0.53) },
//! )
//! .unwrap()
//! .with_tool("Micrometer");
//!
//! let mut form = InspectionForm::new();
//! let status = form.record(&od, Some(FieldValue::Number(0.50)));
//! assert!(status.is_pass());
//!
//! let stats = form.stats(std::slice::from_ref(&od));
//! assert!(stats.all_passed());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod definition;
mod form;
mod value;

// Re-exports
pub use definition::{DefinitionError, FieldDefinition, FieldKind};
pub use form::{evaluate, FormStats, InspectionForm};
pub use value::{FieldValue, InspectionValue};

/// Common imports for working with inspection fields
pub mod prelude {
    pub use crate::{
        evaluate, DefinitionError, FieldDefinition, FieldKind, FieldValue, FormStats,
        InspectionForm, InspectionValue,
    };
    pub use fpi_spec::InspectionStatus;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
