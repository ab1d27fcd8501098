//! Session-level error type
//!
//! Collaborator errors fold into one umbrella so callers handle a
//! single type at the session boundary, while every guard failure
//! keeps its own user-facing message.

use crate::{AuthError, LookupError, ProductionError, Role, ShipmentError};
use fpi_config::ConfigError;
use fpi_disposition::DispositionError;

/// Anything an inspection session can refuse to do
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The signed-in role may not perform this operation
    #[error("{role} may not perform this operation")]
    ReadOnly {
        /// Role that was refused
        role: Role,
    },

    /// Shipping requires a released lot
    #[error("no released lot to ship against")]
    NotReleased,

    /// Disposition transition refused
    #[error(transparent)]
    Disposition(#[from] DispositionError),

    /// Sign-in refused
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Lot scan or lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Production report refused
    #[error("production report refused: {0}")]
    Production(#[from] ProductionError),

    /// Shipment refused
    #[error("shipment refused: {0}")]
    Shipment(#[from] ShipmentError),

    /// Part configuration rejected
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Check if the caller can fix the input and retry this session
    ///
    /// A decided lot stays decided until the next shift reset; every
    /// other refusal clears once its cause does.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Disposition(DispositionError::AlreadyDecided(_))
        )
    }
}
