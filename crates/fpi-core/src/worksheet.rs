//! The active checklist: fixed specs or part-driven fields
//!
//! Sessions run exactly one of the two validators. The worksheet is the
//! closed union over them, so the session, the release guard, and the
//! certificate all stay validator-agnostic.

use fpi_config::PartConfig;
use fpi_disposition::ReleaseCheck;
use fpi_field::{FieldValue, InspectionForm};
use fpi_spec::{InspectionStatus, RecordOutcome, SpecId, SpecSheet, SpecTemplate};
use serde::{Deserialize, Serialize};

/// Aggregate counters over the active checklist, recomputed per read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorksheetSummary {
    /// Entries the checklist defines
    pub total: usize,

    /// Entries currently passing
    pub passed: usize,

    /// Entries currently failing
    pub failed: usize,

    /// Entries still awaiting a value
    pub pending: usize,
}

impl WorksheetSummary {
    /// Check if every entry has a definitive outcome
    #[inline]
    #[must_use]
    pub fn fully_inspected(&self) -> bool {
        self.pending == 0
    }

    /// Check if the checklist passed outright (false when empty)
    #[inline]
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }

    /// Check if any entry failed
    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Snapshot consumed by the release guard
    #[inline]
    #[must_use]
    pub fn release_check(&self) -> ReleaseCheck {
        ReleaseCheck::new(self.total, self.failed, self.pending)
    }
}

/// The checklist a session inspects against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Worksheet {
    /// Static tolerance sheet with a fixed characteristic list
    Fixed(SpecSheet),

    /// Typed fields read from a part configuration
    PartDriven {
        /// Configuration the fields come from
        part: PartConfig,
        /// Recorded entries
        form: InspectionForm,
    },
}

impl Worksheet {
    /// Checklist over a fixed characteristic template
    #[must_use]
    pub fn fixed(template: SpecTemplate) -> Self {
        Self::Fixed(SpecSheet::new(template))
    }

    /// Checklist over a part's configured fields
    #[must_use]
    pub fn part_driven(part: PartConfig) -> Self {
        Self::PartDriven {
            part,
            form: InspectionForm::new(),
        }
    }

    /// Record a measurement against a fixed characteristic
    ///
    /// Silent no-op (`None`) when the id is unknown or the checklist is
    /// part-driven; stale updates never take a session down.
    pub fn record_measurement(&mut self, id: SpecId, actual: Option<f64>) -> Option<InspectionStatus> {
        match self {
            Self::Fixed(sheet) => match sheet.record(id, actual) {
                RecordOutcome::Applied(status) => Some(status),
                RecordOutcome::UnknownId => None,
            },
            Self::PartDriven { .. } => None,
        }
    }

    /// Record a typed value against a configured field
    ///
    /// Silent no-op (`None`) when the field is not configured or the
    /// checklist is fixed.
    pub fn record_field(&mut self, field_id: &str, value: Option<FieldValue>) -> Option<InspectionStatus> {
        match self {
            Self::Fixed(_) => None,
            Self::PartDriven { part, form } => {
                let definition = part.field(field_id)?;
                Some(form.record(definition, value))
            }
        }
    }

    /// Tally the checklist
    #[must_use]
    pub fn summary(&self) -> WorksheetSummary {
        match self {
            Self::Fixed(sheet) => {
                let stats = sheet.stats();
                WorksheetSummary {
                    total: stats.total,
                    passed: stats.passed,
                    failed: stats.failed,
                    pending: stats.pending,
                }
            }
            Self::PartDriven { part, form } => {
                let stats = form.stats(&part.fields);
                WorksheetSummary {
                    total: stats.total,
                    passed: stats.passed,
                    failed: stats.failed,
                    pending: stats.pending,
                }
            }
        }
    }

    /// One rendered line per entry, for the certificate
    #[must_use]
    pub fn citations(&self) -> Vec<String> {
        match self {
            Self::Fixed(sheet) => sheet.citations(),
            Self::PartDriven { part, form } => part
                .fields
                .iter()
                .map(|definition| {
                    let entry = form.value_for(&definition.id);
                    let rendered = entry
                        .value()
                        .map_or_else(|| "not inspected".to_string(), FieldValue::render);
                    let line = format!("{} {} {}", definition.name, rendered, entry.status());
                    match &definition.tool {
                        Some(tool) => format!("{line} ({tool})"),
                        None => line,
                    }
                })
                .collect(),
        }
    }

    /// Wipe every recorded value, back to an untouched checklist
    pub fn reset(&mut self) {
        match self {
            Self::Fixed(sheet) => sheet.reset(),
            Self::PartDriven { form, .. } => form.clear(),
        }
    }

    /// Part configuration behind a part-driven checklist
    #[must_use]
    pub fn part(&self) -> Option<&PartConfig> {
        match self {
            Self::Fixed(_) => None,
            Self::PartDriven { part, .. } => Some(part),
        }
    }

    /// Checklist kind (for logging)
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::PartDriven { .. } => "part-driven",
        }
    }
}
