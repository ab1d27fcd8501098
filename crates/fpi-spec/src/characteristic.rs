//! Characteristic specifications
//!
//! A [`CharacteristicSpec`] is one measurable dimension of a part
//! (diameter, length, radius) with its inclusive tolerance band, the
//! measuring tool, and the recorded actual. Its status is always derived
//! from `actual`/`min`/`max` and can never drift out of sync.

use crate::status::InspectionStatus;
use serde::{Deserialize, Serialize};

/// Stable identifier of a characteristic within a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpecId(pub u32);

impl std::fmt::Display for SpecId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One measurable characteristic with its tolerance band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicSpec {
    /// Stable identifier
    pub id: SpecId,
    /// Dimension or attribute name (e.g. "Outer Diameter")
    pub characteristic: String,
    /// Measuring instrument (e.g. "Micrometer")
    pub tool: String,
    /// Lower tolerance bound, inclusive
    pub min: f64,
    /// Upper tolerance bound, inclusive
    pub max: f64,
    /// Recorded measurement, absent until entered
    actual: Option<f64>,
    /// Derived status; recomputed on every mutation of `actual`
    status: InspectionStatus,
}

impl CharacteristicSpec {
    /// Create a new characteristic with no measurement recorded
    #[inline]
    #[must_use]
    pub fn new(
        id: u32,
        characteristic: impl Into<String>,
        tool: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            id: SpecId(id),
            characteristic: characteristic.into(),
            tool: tool.into(),
            min,
            max,
            actual: None,
            status: InspectionStatus::Pending,
        }
    }

    /// Record a measurement (or clear it with `None`), recomputing status
    #[inline]
    pub fn record(&mut self, actual: Option<f64>) -> InspectionStatus {
        self.actual = actual;
        self.status = InspectionStatus::of(actual, self.min, self.max);
        self.status
    }

    /// Recorded measurement, if any
    #[inline]
    #[must_use]
    pub fn actual(&self) -> Option<f64> {
        self.actual
    }

    /// Current derived status
    #[inline]
    #[must_use]
    pub fn status(&self) -> InspectionStatus {
        self.status
    }

    /// Clear the measurement back to the pending state
    #[inline]
    pub fn clear(&mut self) {
        self.record(None);
    }

    /// Citation line for conformance reports, e.g.
    /// `"Outer Diameter [0.4700, 0.5300] actual 0.5000 PASS (Micrometer)"`
    #[must_use]
    pub fn citation(&self) -> String {
        match self.actual {
            Some(v) => format!(
                "{} [{:.4}, {:.4}] actual {:.4} {} ({})",
                self.characteristic, self.min, self.max, v, self.status, self.tool
            ),
            None => format!(
                "{} [{:.4}, {:.4}] not measured ({})",
                self.characteristic, self.min, self.max, self.tool
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spec_is_pending() {
        let spec = CharacteristicSpec::new(1, "Diameter", "Micrometer", 0.47, 0.53);
        assert_eq!(spec.status(), InspectionStatus::Pending);
        assert_eq!(spec.actual(), None);
    }

    #[test]
    fn record_recomputes_status() {
        let mut spec = CharacteristicSpec::new(1, "Diameter", "Micrometer", 0.47, 0.53);

        assert_eq!(spec.record(Some(0.50)), InspectionStatus::Pass);
        assert_eq!(spec.record(Some(0.60)), InspectionStatus::Fail);
        assert_eq!(spec.record(None), InspectionStatus::Pending);
    }

    #[test]
    fn clear_returns_to_pending() {
        let mut spec = CharacteristicSpec::new(2, "Length", "Caliper", 1.0, 2.0);
        spec.record(Some(1.5));
        spec.clear();

        assert_eq!(spec.actual(), None);
        assert_eq!(spec.status(), InspectionStatus::Pending);
    }

    #[test]
    fn citation_mentions_tool_and_status() {
        let mut spec = CharacteristicSpec::new(1, "Diameter", "Micrometer", 0.47, 0.53);
        spec.record(Some(0.50));

        let line = spec.citation();
        assert!(line.contains("Diameter"));
        assert!(line.contains("Micrometer"));
        assert!(line.contains("PASS"));
    }

    #[test]
    fn spec_id_display() {
        assert_eq!(SpecId(7).to_string(), "#7");
    }
}
