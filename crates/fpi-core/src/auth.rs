//! Roles, capabilities, and PIN authentication
//!
//! The session trusts this gate: validators themselves accept edits
//! unconditionally, and role enforcement happens at the session
//! boundary before any mutator runs.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Who is driving the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs parts and reports production counts
    Operator,

    /// Measures, dispositions lots, ships
    Inspector,

    /// Reviews KPIs and the shift log
    Manager,

    /// Maintains part configurations
    Engineer,
}

impl Role {
    /// Check if this role may enter measurements
    #[inline]
    #[must_use]
    pub fn can_measure(&self) -> bool {
        matches!(self, Self::Inspector | Self::Engineer)
    }

    /// Check if this role may disposition a lot
    #[inline]
    #[must_use]
    pub fn can_disposition(&self) -> bool {
        matches!(self, Self::Inspector)
    }

    /// Check if this role may edit part configurations
    #[inline]
    #[must_use]
    pub fn can_configure(&self) -> bool {
        matches!(self, Self::Engineer)
    }

    /// Check if this role only reads inspection state
    #[inline]
    #[must_use]
    pub fn view_only(&self) -> bool {
        !self.can_measure()
    }

    /// Role name (for logging/serialization)
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Inspector => "inspector",
            Self::Manager => "manager",
            Self::Engineer => "engineer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Authentication refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No PIN configured for the requested role
    #[error("no PIN configured for {0}")]
    UnknownRole(Role),

    /// Entered PIN does not match the role's digest
    #[error("wrong PIN for {0}")]
    WrongPin(Role),
}

/// Per-role PIN check backed by SHA-256 digests
///
/// Only digests are held; entered PINs are hashed and compared, never
/// stored.
#[derive(Debug, Clone)]
pub struct PinAuthenticator {
    digests: HashMap<Role, String>,
}

impl PinAuthenticator {
    /// Create an authenticator with no PINs configured
    #[must_use]
    pub fn new() -> Self {
        Self {
            digests: HashMap::new(),
        }
    }

    /// Authenticator seeded with the demo PINs
    ///
    /// Operator `1111`, inspector `2222`, manager `3333`, engineer
    /// `4444`.
    #[must_use]
    pub fn with_demo_pins() -> Self {
        let mut auth = Self::new();
        auth.set_pin(Role::Operator, "1111");
        auth.set_pin(Role::Inspector, "2222");
        auth.set_pin(Role::Manager, "3333");
        auth.set_pin(Role::Engineer, "4444");
        auth
    }

    /// Set or replace the PIN for a role
    pub fn set_pin(&mut self, role: Role, pin: &str) {
        self.digests.insert(role, digest(pin));
    }

    /// Check an entered PIN against a role
    ///
    /// # Errors
    /// - [`AuthError::UnknownRole`] when the role has no PIN configured
    /// - [`AuthError::WrongPin`] when the digest does not match
    pub fn authenticate(&self, pin: &str, target: Role) -> Result<(), AuthError> {
        let expected = self
            .digests
            .get(&target)
            .ok_or(AuthError::UnknownRole(target))?;

        if digest(pin) == *expected {
            Ok(())
        } else {
            Err(AuthError::WrongPin(target))
        }
    }
}

impl Default for PinAuthenticator {
    fn default() -> Self {
        Self::with_demo_pins()
    }
}

fn digest(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hex::encode(hasher.finalize())
}
