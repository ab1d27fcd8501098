//! FPI Disposition System
//!
//! One-way accept/reject lifecycle for inspected lots.
//!
//! # Core Concepts
//!
//! - [`LotState`]: `Open` until exactly one terminal decision
//! - [`Disposition`]: Holds the state and enforces the transition table
//! - [`ReleaseCheck`]: Inspection snapshot consulted by the release guard
//! - [`DispositionError`]: Refused transitions, one variant per reason
//!
//! Release is guarded (no failures, nothing pending, checklist
//! non-empty); rejection is unconditional. Both are final until a full
//! shift reset.
//!
//! # Example
//!
//! ```rust
//! use fpi_disposition::{Disposition, DispositionError, ReleaseCheck};
//!
//! let mut lot = Disposition::new();
//!
//! // Two entries still pending: the guard refuses with a reason.
//! let err = lot.release(ReleaseCheck::new(3, 0, 2)).unwrap_err();
//! assert_eq!(err, DispositionError::IncompleteInspection { pending: 2 });
//!
//! // Fully inspected and clean: the lot goes out.
//! lot.release(ReleaseCheck::new(3, 0, 0)).unwrap();
//! assert!(lot.released());
//! ```

#![warn(missing_docs)]

mod disposition;
mod state;

// Re-exports
pub use disposition::{Disposition, DispositionError, ReleaseCheck};
pub use state::LotState;

/// Common imports for lot disposition
pub mod prelude {
    pub use crate::{Disposition, DispositionError, LotState, ReleaseCheck};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
