//! Lot lifecycle states and the transition table over them

use serde::{Deserialize, Serialize};

/// Lifecycle state of a lot under inspection
///
/// A lot starts `Open` and leaves it exactly once, into one of two
/// terminal states. `Open` is re-entered only through a full shift
/// reset, which is a new lifecycle rather than a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LotState {
    /// Under inspection; measurements may still change
    #[default]
    Open,

    /// Accepted and released to the customer (terminal)
    Released,

    /// Rejected by the inspector (terminal)
    Rejected,
}

impl LotState {
    /// States reachable from `from` in a single transition
    #[must_use]
    pub fn allowed_transitions(from: Self) -> Vec<Self> {
        match from {
            Self::Open => vec![Self::Released, Self::Rejected],
            Self::Released | Self::Rejected => vec![],
        }
    }

    /// Check if `from -> to` appears in the transition table
    #[must_use]
    pub fn can_transition(from: Self, to: Self) -> bool {
        Self::allowed_transitions(from).into_iter().any(|s| s == to)
    }

    /// Check if no further transitions exist from this state
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        Self::allowed_transitions(*self).is_empty()
    }

    /// Check if the lot is still under inspection
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// State name (for logging/serialization)
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Released => "released",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for LotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
