//! Append-only in-memory log of what happened this shift

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One logged occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftEvent {
    /// A lot was scanned and resolved
    LotScanned {
        /// Resolved lot number
        lot_number: String,
    },

    /// A measurement or field value was recorded
    ValueRecorded {
        /// Characteristic or field identifier
        entry: String,
        /// Evaluated status label
        status: String,
    },

    /// The lot was released
    LotReleased {
        /// Lot number, when one was scanned
        lot_number: Option<String>,
        /// Whether the certificate rendered
        certificate: bool,
    },

    /// The lot was rejected
    LotRejected {
        /// Lot number, when one was scanned
        lot_number: Option<String>,
    },

    /// An operator reported production counts
    ProductionReported {
        /// Reporting operator
        operator: String,
        /// Pieces produced
        produced: u32,
        /// Pieces found defective
        defective: u32,
    },

    /// Pieces were shipped against the released lot
    Shipped {
        /// Pieces in this shipment
        quantity: u32,
    },

    /// The shift was reset to a clean slate
    ShiftReset,
}

/// A [`ShiftEvent`] with its timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// When the event was appended
    pub at: DateTime<Utc>,

    /// What happened
    pub event: ShiftEvent,
}

/// Append-only event log for the current shift
///
/// Interior mutability so every collaborator can append through a
/// shared reference; readers get snapshots.
#[derive(Debug, Default)]
pub struct ShiftLog {
    inner: Mutex<Vec<LoggedEvent>>,
}

impl ShiftLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event, stamped now
    pub fn append(&self, event: ShiftEvent) {
        self.inner.lock().push(LoggedEvent {
            at: Utc::now(),
            event,
        });
    }

    /// Snapshot of every event, oldest first
    #[must_use]
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.inner.lock().clone()
    }

    /// Number of logged events
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Drop everything (new shift, new log)
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
