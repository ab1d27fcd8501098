//! Inspection status and tolerance evaluation
//!
//! [`InspectionStatus`] is shared by the static spec validator and the
//! dynamic field validator: an entry is `Pending` until a value is
//! entered, then `Pass` or `Fail` depending on its validation rule.

use serde::{Deserialize, Serialize};

/// Status of a single inspected characteristic or field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionStatus {
    /// No value entered yet
    Pending,
    /// Entered value satisfies the rule
    Pass,
    /// Entered value violates the rule
    Fail,
}

impl InspectionStatus {
    /// Evaluate a measurement against an inclusive `[min, max]` tolerance.
    ///
    /// An absent measurement is always `Pending`, regardless of bounds.
    /// Comparisons are plain float comparisons, so a non-finite
    /// measurement against finite bounds fails.
    #[inline]
    #[must_use]
    pub fn of(actual: Option<f64>, min: f64, max: f64) -> Self {
        match actual {
            None => Self::Pending,
            Some(v) if v >= min && v <= max => Self::Pass,
            Some(_) => Self::Fail,
        }
    }

    /// Check if status is pending
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Check if status is a pass
    #[inline]
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Check if status is a failure
    #[inline]
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Fixed-width label for reports and CLI output
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl Default for InspectionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
