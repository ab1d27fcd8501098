//! Inspection sheets over a static specification list
//!
//! A [`SpecSheet`] owns the pristine [`SpecTemplate`] plus the working
//! entries the inspector mutates. Aggregate counts are recomputed from
//! scratch on every read so they can never go stale.

use crate::characteristic::{CharacteristicSpec, SpecId};
use crate::status::InspectionStatus;
use crate::template::SpecTemplate;
use serde::{Deserialize, Serialize};

/// Result of recording a measurement on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Entry found; carries its recomputed status
    Applied(InspectionStatus),
    /// No entry with that id; the sheet was left untouched.
    /// Stale ids from a rebuilt view land here instead of crashing the
    /// session.
    UnknownId,
}

impl RecordOutcome {
    /// Check if the measurement was applied
    #[inline]
    #[must_use]
    pub fn applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Aggregate counts over a sheet, partitioned by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecStats {
    /// Number of characteristics on the sheet
    pub total: usize,
    /// Entries currently passing
    pub passed: usize,
    /// Entries currently failing
    pub failed: usize,
    /// Entries with no measurement yet
    pub pending: usize,
}

impl SpecStats {
    /// Every characteristic measured and passing. An empty sheet is
    /// never all-passed: a vacuous release is not a release.
    #[inline]
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }

    /// At least one entry failing
    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// No entry awaiting measurement
    #[inline]
    #[must_use]
    pub fn fully_inspected(&self) -> bool {
        self.pending == 0
    }
}

/// Working inspection sheet built from a static template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecSheet {
    template: SpecTemplate,
    entries: Vec<CharacteristicSpec>,
}

impl SpecSheet {
    /// Build a fresh sheet; every entry starts pending
    #[must_use]
    pub fn new(template: SpecTemplate) -> Self {
        let entries = template.rows().to_vec();
        Self { template, entries }
    }

    /// Record a measurement (or clear it with `None`) on one entry.
    ///
    /// Unknown ids are a silent no-op by contract, never an error.
    pub fn record(&mut self, id: SpecId, actual: Option<f64>) -> RecordOutcome {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => RecordOutcome::Applied(entry.record(actual)),
            None => RecordOutcome::UnknownId,
        }
    }

    /// Restore every entry from the pristine template. Idempotent.
    pub fn reset(&mut self) {
        self.entries = self.template.rows().to_vec();
    }

    /// Working entries in template order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CharacteristicSpec] {
        &self.entries
    }

    /// Look up one entry by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: SpecId) -> Option<&CharacteristicSpec> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of characteristics on the sheet
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the sheet has no characteristics
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Partition the sheet by status. Recomputed on every call.
    #[must_use]
    pub fn stats(&self) -> SpecStats {
        let mut stats = SpecStats {
            total: self.entries.len(),
            ..SpecStats::default()
        };

        for entry in &self.entries {
            match entry.status() {
                InspectionStatus::Pass => stats.passed += 1,
                InspectionStatus::Fail => stats.failed += 1,
                InspectionStatus::Pending => stats.pending += 1,
            }
        }

        stats
    }

    /// Convenience for [`SpecStats::all_passed`]
    #[inline]
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.stats().all_passed()
    }

    /// Convenience for [`SpecStats::has_failures`]
    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.stats().has_failures()
    }

    /// Citation lines for every entry, in template order
    #[must_use]
    pub fn citations(&self) -> Vec<String> {
        self.entries.iter().map(CharacteristicSpec::citation).collect()
    }
}
