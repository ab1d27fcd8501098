//! Per-kind evaluation rules and the inspection form they feed

use crate::{FieldDefinition, FieldKind, FieldValue, InspectionValue};
use fpi_spec::InspectionStatus;
use serde::{Deserialize, Serialize};

/// Evaluate one field rule against an optionally entered value
///
/// Absent values are always `Pending`, regardless of kind. Entered
/// values are dispatched exhaustively over the kind/value pairing:
///
/// - Numeric: `Pass` iff the value clears every bound that is present;
///   bounds are independent, so partial tolerances work.
/// - Checkbox: `Pass` iff checked.
/// - Select: a non-empty catalog choice is `Pass`, an empty choice is
///   treated as unanswered (`Pending`), a choice outside the catalog
///   is `Fail`.
/// - A value of the wrong variant for the kind is `Fail`.
#[must_use]
pub fn evaluate(kind: &FieldKind, value: Option<&FieldValue>) -> InspectionStatus {
    let Some(value) = value else {
        return InspectionStatus::Pending;
    };

    match (kind, value) {
        (FieldKind::Numeric { min, max }, FieldValue::Number(v)) => {
            let clears_min = min.map_or(true, |min| *v >= min);
            let clears_max = max.map_or(true, |max| *v <= max);
            if clears_min && clears_max {
                InspectionStatus::Pass
            } else {
                InspectionStatus::Fail
            }
        }
        (FieldKind::Checkbox, FieldValue::Check(checked)) => {
            if *checked {
                InspectionStatus::Pass
            } else {
                InspectionStatus::Fail
            }
        }
        (FieldKind::Select { options }, FieldValue::Choice(choice)) => {
            if choice.is_empty() {
                InspectionStatus::Pending
            } else if options.iter().any(|option| option == choice) {
                InspectionStatus::Pass
            } else {
                InspectionStatus::Fail
            }
        }
        _ => InspectionStatus::Fail,
    }
}

/// Aggregate counters over a form, recomputed on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormStats {
    /// Number of fields defined for the part
    pub total: usize,

    /// Entries that evaluated to `Pass`
    pub passed: usize,

    /// Entries that evaluated to `Fail`
    pub failed: usize,

    /// Fields still awaiting an answer
    pub pending: usize,

    /// Entries with a definitive outcome (`passed + failed`)
    pub completed: usize,
}

impl FormStats {
    /// Check if every field has a definitive outcome
    #[inline]
    #[must_use]
    pub fn all_inspected(&self) -> bool {
        self.completed == self.total
    }

    /// Check if the whole form passed
    ///
    /// False for an empty field list: a part with nothing to inspect
    /// never counts as passed.
    #[inline]
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.all_inspected() && self.failed == 0 && self.total > 0
    }

    /// Check if any entry failed
    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Inspection entries recorded against a part's field definitions
///
/// Entries are stored in edit order: re-recording a field removes the
/// old entry and appends the fresh one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectionForm {
    values: Vec<InspectionValue>,
}

impl InspectionForm {
    /// Create an empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value for a field and return its evaluated status
    ///
    /// Replaces any existing entry for the same field (remove-then-
    /// insert), so recording is idempotent. An empty select choice is
    /// normalized to an absent value before evaluation.
    pub fn record(
        &mut self,
        definition: &FieldDefinition,
        value: Option<FieldValue>,
    ) -> InspectionStatus {
        let value = match value {
            Some(FieldValue::Choice(choice)) if choice.is_empty() => None,
            other => other,
        };

        let status = evaluate(&definition.kind, value.as_ref());
        self.values.retain(|entry| entry.field_id() != definition.id);
        self.values
            .push(InspectionValue::evaluated(definition.id.clone(), value, status));
        status
    }

    /// Look up the entry for a field
    ///
    /// Total: fields nobody has touched yet come back as the
    /// documented `Pending` default, so callers never need to handle
    /// absence themselves.
    #[must_use]
    pub fn value_for(&self, field_id: &str) -> InspectionValue {
        self.values
            .iter()
            .find(|entry| entry.field_id() == field_id)
            .cloned()
            .unwrap_or_else(|| InspectionValue::untouched(field_id))
    }

    /// All recorded entries, in edit order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[InspectionValue] {
        &self.values
    }

    /// Number of recorded entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been recorded yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every recorded entry
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Tally the form against a part's field definitions
    ///
    /// `total` is the definition-list length; stale entries for fields
    /// no longer defined are ignored.
    #[must_use]
    pub fn stats(&self, definitions: &[FieldDefinition]) -> FormStats {
        let mut stats = FormStats {
            total: definitions.len(),
            ..FormStats::default()
        };

        for definition in definitions {
            match self.value_for(&definition.id).status() {
                InspectionStatus::Pass => stats.passed += 1,
                InspectionStatus::Fail => stats.failed += 1,
                InspectionStatus::Pending => stats.pending += 1,
            }
        }
        stats.completed = stats.passed + stats.failed;

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(id: &str, min: Option<f64>, max: Option<f64>) -> FieldDefinition {
        FieldDefinition::new(id, "Numeric", FieldKind::Numeric { min, max }).unwrap()
    }

    fn material_select(id: &str) -> FieldDefinition {
        FieldDefinition::new(
            id,
            "Material",
            FieldKind::Select {
                options: vec!["304".into(), "316".into()],
            },
        )
        .unwrap()
        .with_required(true)
    }

    #[test]
    fn absent_value_pending_for_every_kind() {
        let kinds = [
            FieldKind::Numeric {
                min: Some(0.0),
                max: Some(1.0),
            },
            FieldKind::Checkbox,
            FieldKind::Select {
                options: vec!["a".into()],
            },
        ];
        for kind in &kinds {
            assert!(evaluate(kind, None).is_pending());
        }
    }

    #[test]
    fn numeric_partial_bounds_independent() {
        let max_only = FieldKind::Numeric {
            min: None,
            max: Some(2.0),
        };
        assert!(evaluate(&max_only, Some(&FieldValue::Number(-100.0))).is_pass());
        assert!(evaluate(&max_only, Some(&FieldValue::Number(2.0))).is_pass());
        assert!(evaluate(&max_only, Some(&FieldValue::Number(2.1))).is_fail());

        let min_only = FieldKind::Numeric {
            min: Some(0.5),
            max: None,
        };
        assert!(evaluate(&min_only, Some(&FieldValue::Number(0.5))).is_pass());
        assert!(evaluate(&min_only, Some(&FieldValue::Number(9999.0))).is_pass());
        assert!(evaluate(&min_only, Some(&FieldValue::Number(0.4))).is_fail());
    }

    #[test]
    fn unbounded_numeric_always_passes() {
        let open = FieldKind::Numeric {
            min: None,
            max: None,
        };
        assert!(evaluate(&open, Some(&FieldValue::Number(1e300))).is_pass());
    }

    #[test]
    fn checkbox_has_no_partial_pass() {
        assert!(evaluate(&FieldKind::Checkbox, Some(&FieldValue::Check(true))).is_pass());
        assert!(evaluate(&FieldKind::Checkbox, Some(&FieldValue::Check(false))).is_fail());
    }

    #[test]
    fn required_select_unanswered_is_pending_not_fail() {
        let def = material_select("mat");
        let mut form = InspectionForm::new();

        assert!(form.value_for("mat").status().is_pending());

        form.record(&def, Some(FieldValue::Choice(String::new())));
        assert!(form.value_for("mat").status().is_pending());

        form.record(&def, Some(FieldValue::Choice("304".into())));
        assert!(form.value_for("mat").status().is_pass());
    }

    #[test]
    fn out_of_catalog_choice_fails() {
        let def = material_select("mat");
        let mut form = InspectionForm::new();

        form.record(&def, Some(FieldValue::Choice("titanium".into())));
        assert!(form.value_for("mat").status().is_fail());
    }

    #[test]
    fn wrong_variant_fails() {
        assert!(evaluate(&FieldKind::Checkbox, Some(&FieldValue::Number(1.0))).is_fail());
        assert!(evaluate(
            &FieldKind::Numeric {
                min: None,
                max: Some(1.0),
            },
            Some(&FieldValue::Choice("1.0".into())),
        )
        .is_fail());
    }

    #[test]
    fn record_is_remove_then_insert() {
        let od = numeric("od", Some(0.0), Some(1.0));
        let depth = numeric("depth", Some(0.0), Some(1.0));
        let mut form = InspectionForm::new();

        form.record(&od, Some(FieldValue::Number(0.5)));
        form.record(&depth, Some(FieldValue::Number(0.5)));
        form.record(&od, Some(FieldValue::Number(0.6)));

        assert_eq!(form.len(), 2);
        // Re-recording moved "od" to the back: storage is edit order.
        assert_eq!(form.values()[0].field_id(), "depth");
        assert_eq!(form.values()[1].field_id(), "od");
        assert_eq!(
            form.value_for("od").value(),
            Some(&FieldValue::Number(0.6))
        );
    }

    #[test]
    fn stats_tally_and_completion() {
        let defs = vec![
            numeric("od", Some(0.47), Some(0.53)),
            material_select("mat"),
            FieldDefinition::new("burr", "Burr Free", FieldKind::Checkbox).unwrap(),
        ];
        let mut form = InspectionForm::new();

        let stats = form.stats(&defs);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 3);
        assert!(!stats.all_inspected());
        assert!(!stats.all_passed());

        form.record(&defs[0], Some(FieldValue::Number(0.50)));
        form.record(&defs[1], Some(FieldValue::Choice("304".into())));
        form.record(&defs[2], Some(FieldValue::Check(false)));

        let stats = form.stats(&defs);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.completed, 3);
        assert!(stats.all_inspected());
        assert!(stats.has_failures());
        assert!(!stats.all_passed());

        form.record(&defs[2], Some(FieldValue::Check(true)));
        assert!(form.stats(&defs).all_passed());
    }

    #[test]
    fn empty_definition_list_never_all_passed() {
        let form = InspectionForm::new();
        let stats = form.stats(&[]);

        assert!(stats.all_inspected());
        assert!(!stats.all_passed());
    }

    #[test]
    fn stale_entries_ignored_by_stats() {
        let od = numeric("od", Some(0.0), Some(1.0));
        let mut form = InspectionForm::new();
        form.record(&od, Some(FieldValue::Number(0.5)));

        let stats = form.stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.passed, 0);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let od = numeric("od", Some(0.0), Some(1.0));
        let mut form = InspectionForm::new();
        form.record(&od, Some(FieldValue::Number(0.5)));

        form.clear();
        assert!(form.is_empty());
        assert!(form.value_for("od").status().is_pending());
    }
}
