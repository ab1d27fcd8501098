//! Operator production reports and shift KPIs

use crate::{LoggedEvent, ShiftEvent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Production report rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductionError {
    /// Operator name is empty or whitespace
    #[error("production report has no operator")]
    BlankOperator,

    /// More defects than pieces
    #[error("defective count {defective} exceeds produced count {produced}")]
    DefectiveExceedsProduced {
        /// Pieces produced
        produced: u32,
        /// Pieces found defective
        defective: u32,
    },
}

/// One operator's production report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionEntry {
    /// Reporting operator
    pub operator: String,

    /// Pieces produced
    pub produced: u32,

    /// Pieces found defective
    pub defective: u32,

    /// When the report was taken
    pub noted_at: DateTime<Utc>,

    /// Free-form note
    pub note: Option<String>,
}

impl ProductionEntry {
    /// Create a validated report stamped now
    ///
    /// # Errors
    /// Returns [`ProductionError`] for a blank operator or a defective
    /// count above the produced count.
    pub fn new(
        operator: impl Into<String>,
        produced: u32,
        defective: u32,
    ) -> Result<Self, ProductionError> {
        let operator = operator.into();
        if operator.trim().is_empty() {
            return Err(ProductionError::BlankOperator);
        }
        if defective > produced {
            return Err(ProductionError::DefectiveExceedsProduced {
                produced,
                defective,
            });
        }

        Ok(Self {
            operator,
            produced,
            defective,
            noted_at: Utc::now(),
            note: None,
        })
    }

    /// With note
    #[inline]
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Shift KPIs, recomputed from the event log on every read
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Pieces produced across all reports
    pub produced: u32,

    /// Pieces found defective across all reports
    pub defective: u32,

    /// `defective / produced`, zero when nothing was produced
    pub defect_rate: f64,

    /// Lots released this shift
    pub lots_released: usize,

    /// Lots rejected this shift
    pub lots_rejected: usize,

    /// Measurements and field values recorded
    pub values_recorded: usize,

    /// Pieces shipped against released lots
    pub shipped: u32,
}

impl KpiSummary {
    /// Tally KPIs from a shift's events
    #[must_use]
    pub fn from_events(events: &[LoggedEvent]) -> Self {
        let mut summary = Self::default();

        for logged in events {
            match &logged.event {
                ShiftEvent::ProductionReported {
                    produced,
                    defective,
                    ..
                } => {
                    summary.produced += produced;
                    summary.defective += defective;
                }
                ShiftEvent::LotReleased { .. } => summary.lots_released += 1,
                ShiftEvent::LotRejected { .. } => summary.lots_rejected += 1,
                ShiftEvent::ValueRecorded { .. } => summary.values_recorded += 1,
                ShiftEvent::Shipped { quantity } => summary.shipped += quantity,
                ShiftEvent::LotScanned { .. } | ShiftEvent::ShiftReset => {}
            }
        }

        summary.defect_rate = if summary.produced == 0 {
            0.0
        } else {
            f64::from(summary.defective) / f64::from(summary.produced)
        };

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShiftLog;

    #[test]
    fn entry_validation() {
        let entry = ProductionEntry::new("J. Okafor", 120, 3)
            .unwrap()
            .with_note("tooling chatter on last 10");
        assert_eq!(entry.produced, 120);
        assert_eq!(entry.note.as_deref(), Some("tooling chatter on last 10"));

        assert_eq!(
            ProductionEntry::new(" ", 10, 0).unwrap_err(),
            ProductionError::BlankOperator
        );
        assert_eq!(
            ProductionEntry::new("J. Okafor", 5, 6).unwrap_err(),
            ProductionError::DefectiveExceedsProduced {
                produced: 5,
                defective: 6,
            }
        );
    }

    #[test]
    fn defective_may_equal_produced() {
        let entry = ProductionEntry::new("J. Okafor", 4, 4).unwrap();
        assert_eq!(entry.defective, 4);
    }

    #[test]
    fn kpis_tally_from_log() {
        let log = ShiftLog::new();
        log.append(ShiftEvent::ProductionReported {
            operator: "J. Okafor".into(),
            produced: 100,
            defective: 5,
        });
        log.append(ShiftEvent::ProductionReported {
            operator: "M. Chen".into(),
            produced: 60,
            defective: 3,
        });
        log.append(ShiftEvent::ValueRecorded {
            entry: "od".into(),
            status: "PASS".into(),
        });
        log.append(ShiftEvent::LotReleased {
            lot_number: Some("LOT-240815".into()),
            certificate: true,
        });
        log.append(ShiftEvent::Shipped { quantity: 80 });

        let kpis = KpiSummary::from_events(&log.events());
        assert_eq!(kpis.produced, 160);
        assert_eq!(kpis.defective, 8);
        assert_eq!(kpis.defect_rate, 0.05);
        assert_eq!(kpis.lots_released, 1);
        assert_eq!(kpis.lots_rejected, 0);
        assert_eq!(kpis.values_recorded, 1);
        assert_eq!(kpis.shipped, 80);
    }

    #[test]
    fn empty_shift_has_zero_rate() {
        let kpis = KpiSummary::from_events(&[]);
        assert_eq!(kpis.defect_rate, 0.0);
        assert_eq!(kpis.produced, 0);
    }
}
