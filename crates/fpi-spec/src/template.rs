//! Specification templates
//!
//! A [`SpecTemplate`] is the engineering-owned list of characteristics a
//! sheet is built from. Templates are validated at construction so the
//! inspection loop never has to handle malformed tolerances: duplicate
//! ids, non-finite bounds, and inverted bands are rejected up front.

use crate::characteristic::{CharacteristicSpec, SpecId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors detected while building a template
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Two rows share one identifier
    #[error("duplicate characteristic id {0}")]
    DuplicateId(SpecId),

    /// A tolerance bound is NaN or infinite
    #[error("characteristic {id}: tolerance bounds must be finite")]
    NonFiniteBounds {
        /// Offending row
        id: SpecId,
    },

    /// Lower bound exceeds upper bound
    #[error("characteristic {id}: min {min} exceeds max {max}")]
    InvertedTolerance {
        /// Offending row
        id: SpecId,
        /// Lower bound as given
        min: f64,
        /// Upper bound as given
        max: f64,
    },

    /// Characteristic name is empty or whitespace
    #[error("characteristic {id}: name must not be blank")]
    BlankName {
        /// Offending row
        id: SpecId,
    },
}

/// Validated, immutable list of characteristics
///
/// The template is the source of truth for [`crate::SpecSheet::reset`]:
/// resets restore from here, never from the mutated working copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecTemplate {
    rows: Vec<CharacteristicSpec>,
}

impl SpecTemplate {
    /// Validate and build a template; recorded measurements on the input
    /// rows are discarded so every template row starts pending.
    pub fn new(mut rows: Vec<CharacteristicSpec>) -> Result<Self, TemplateError> {
        let mut seen = HashSet::new();

        for row in &rows {
            if !seen.insert(row.id) {
                return Err(TemplateError::DuplicateId(row.id));
            }
            if row.characteristic.trim().is_empty() {
                return Err(TemplateError::BlankName { id: row.id });
            }
            if !row.min.is_finite() || !row.max.is_finite() {
                return Err(TemplateError::NonFiniteBounds { id: row.id });
            }
            if row.min > row.max {
                return Err(TemplateError::InvertedTolerance {
                    id: row.id,
                    min: row.min,
                    max: row.max,
                });
            }
        }

        for row in &mut rows {
            row.clear();
        }

        Ok(Self { rows })
    }

    /// Template with no characteristics (a sheet built from it can never
    /// be released; see [`crate::SpecStats::all_passed`])
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Template rows in engineering order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[CharacteristicSpec] {
        &self.rows
    }

    /// Number of characteristics
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the template has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
