//! FPI Core - First-Piece Inspection station
//!
//! The central coordinator that:
//! - Signs people in by role and PIN
//! - Scans lot labels and resolves them to lot details
//! - Records measurements and checklist values on the active worksheet
//! - Drives lot disposition with one-shot certificate generation
//! - Tracks production reports and shipments for shift KPIs
//!
//! # Example
//!
//! ```
//! use fpi_core::{InspectionSession, Role, SessionConfig, Worksheet};
//! use fpi_spec::{CharacteristicSpec, SpecId, SpecTemplate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let template = SpecTemplate::new(vec![
//!     CharacteristicSpec::new(1, "Outer Diameter", "Micrometer", 0.47, 0.53),
//! ])?;
//!
//! let config = SessionConfig::new(Role::Inspector, "R. Alvarez")
//!     .with_customer("Acme Aerospace")
//!     .with_part_label("PN-1042", "Pivot Bushing");
//! let mut session = InspectionSession::new(config, Worksheet::fixed(template));
//!
//! session.record_measurement(SpecId(1), Some(0.50))?;
//! let outcome = session.approve()?;
//!
//! assert!(session.released());
//! // No lot was scanned, so the paperwork declined to render.
//! assert!(!outcome.certified());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod auth;
pub mod context;
pub mod error;
pub mod production;
pub mod scan;
pub mod session;
pub mod shift_log;
pub mod shipment;
pub mod worksheet;

// Re-exports for convenience
pub use auth::{AuthError, PinAuthenticator, Role};
pub use context::{SessionContext, SessionId};
pub use error::SessionError;
pub use production::{KpiSummary, ProductionEntry, ProductionError};
pub use scan::{
    validate_scan, LookupError, LotDirectory, LotInfo, LotScanner, MockLotDirectory, MIN_SCAN_LEN,
};
pub use session::{InspectionSession, ReleaseOutcome, SessionConfig};
pub use shift_log::{LoggedEvent, ShiftEvent, ShiftLog};
pub use shipment::{Shipment, ShipmentError, ShipmentLedger};
pub use worksheet::{Worksheet, WorksheetSummary};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with FPI Core
    pub use crate::{
        InspectionSession, LotInfo, LotScanner, PinAuthenticator, ReleaseOutcome, Role,
        SessionConfig, SessionContext, SessionError, ShiftEvent, ShiftLog, Worksheet,
        WorksheetSummary,
    };
    pub use fpi_disposition::LotState;
    pub use fpi_field::FieldValue;
    pub use fpi_spec::{InspectionStatus, SpecId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
