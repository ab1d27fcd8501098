//! Guarded disposition decisions over a lot's lifecycle

use crate::LotState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of inspection progress at the moment a release is attempted
///
/// Built by the caller from whichever validator is active; the state
/// machine itself never inspects entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReleaseCheck {
    /// Entries the active checklist defines
    pub total: usize,

    /// Entries currently failing
    pub failed: usize,

    /// Entries still awaiting a value
    pub pending: usize,
}

impl ReleaseCheck {
    /// Create a snapshot
    #[inline]
    #[must_use]
    pub fn new(total: usize, failed: usize, pending: usize) -> Self {
        Self {
            total,
            failed,
            pending,
        }
    }

    /// Check if any entry is failing
    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Check if every entry has a definitive outcome
    #[inline]
    #[must_use]
    pub fn fully_inspected(&self) -> bool {
        self.pending == 0
    }
}

/// A disposition attempt that was refused
///
/// Guard failures are reported independently so the caller can surface
/// a distinct message for each condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DispositionError {
    /// Lot already left `Open`; the decision is final for the session
    #[error("lot already {0}")]
    AlreadyDecided(LotState),

    /// Release refused: failing entries present
    #[error("cannot release: {failed} failing entries")]
    FailuresPresent {
        /// Number of failing entries
        failed: usize,
    },

    /// Release refused: entries still pending
    #[error("cannot release: {pending} entries not yet inspected")]
    IncompleteInspection {
        /// Number of pending entries
        pending: usize,
    },

    /// Release refused: the checklist is empty
    #[error("cannot release: nothing to inspect")]
    NothingToInspect,
}

impl DispositionError {
    /// Check if retrying after fixing entries can succeed
    ///
    /// Guard failures clear once the checklist does; a decided lot
    /// stays decided until the next shift reset.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::AlreadyDecided(_))
    }
}

/// One-way disposition of a single lot
///
/// Starts `Open`, accepts exactly one decision, and refuses everything
/// after it. [`Disposition::reset`] starts a fresh lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Disposition {
    state: LotState,
    decided_at: Option<DateTime<Utc>>,
}

impl Disposition {
    /// Create an open disposition
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> LotState {
        self.state
    }

    /// When the decision was made, if one has been
    #[inline]
    #[must_use]
    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        self.decided_at
    }

    /// Check if the lot was released
    #[inline]
    #[must_use]
    pub fn released(&self) -> bool {
        self.state == LotState::Released
    }

    /// Check if the lot was rejected
    #[inline]
    #[must_use]
    pub fn rejected(&self) -> bool {
        self.state == LotState::Rejected
    }

    /// Check if either decision has been made
    #[inline]
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.state.is_terminal()
    }

    /// Release the lot, guarded by the inspection snapshot
    ///
    /// Failures are reported before incompleteness: a checklist that is
    /// both failing and unfinished refuses with the failure reason.
    ///
    /// # Errors
    /// - [`DispositionError::AlreadyDecided`] when the lot left `Open`
    /// - [`DispositionError::FailuresPresent`] when entries fail
    /// - [`DispositionError::NothingToInspect`] for an empty checklist
    /// - [`DispositionError::IncompleteInspection`] when entries are pending
    pub fn release(&mut self, check: ReleaseCheck) -> Result<(), DispositionError> {
        if self.state.is_terminal() {
            return Err(DispositionError::AlreadyDecided(self.state));
        }
        if check.has_failures() {
            return Err(DispositionError::FailuresPresent {
                failed: check.failed,
            });
        }
        if check.total == 0 {
            return Err(DispositionError::NothingToInspect);
        }
        if !check.fully_inspected() {
            return Err(DispositionError::IncompleteInspection {
                pending: check.pending,
            });
        }

        self.state = LotState::Released;
        self.decided_at = Some(Utc::now());
        Ok(())
    }

    /// Reject the lot
    ///
    /// Unconditional apart from finality: rejecting is always safe, so
    /// no inspection snapshot is consulted.
    ///
    /// # Errors
    /// [`DispositionError::AlreadyDecided`] when the lot left `Open`.
    pub fn reject(&mut self) -> Result<(), DispositionError> {
        if self.state.is_terminal() {
            return Err(DispositionError::AlreadyDecided(self.state));
        }

        self.state = LotState::Rejected;
        self.decided_at = Some(Utc::now());
        Ok(())
    }

    /// Start a fresh lifecycle: back to `Open`, decision cleared
    pub fn reset(&mut self) {
        self.state = LotState::Open;
        self.decided_at = None;
    }
}
