//! Explicit session context threaded through the core
//!
//! Role, inspector, and scanned lot live here instead of in ambient
//! globals: the context is created at sign-in, passed to whoever needs
//! it, and torn down by the end-of-shift reset.

use crate::{LotInfo, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique session identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Ulid);

impl SessionId {
    /// Generate new session ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who is signed in, what they scanned, and when they started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Session identifier
    pub id: SessionId,

    /// Active role at the terminal
    pub role: Role,

    /// Signed-in person's name (goes on the certificate)
    pub inspector: String,

    /// Lot currently under inspection, once scanned
    pub lot: Option<LotInfo>,

    /// When the session began
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Start a session for a signed-in person
    #[must_use]
    pub fn new(role: Role, inspector: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            role,
            inspector: inspector.into(),
            lot: None,
            started_at: Utc::now(),
        }
    }

    /// Attach the scanned lot
    pub fn set_lot(&mut self, lot: LotInfo) {
        self.lot = Some(lot);
    }

    /// Drop the scanned lot
    pub fn clear_lot(&mut self) {
        self.lot = None;
    }

    /// Lot number of the scanned lot, if any
    #[must_use]
    pub fn lot_number(&self) -> Option<&str> {
        self.lot.as_ref().map(|lot| lot.lot_number.as_str())
    }
}
