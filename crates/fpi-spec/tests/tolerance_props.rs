use fpi_spec::{CharacteristicSpec, InspectionStatus, SpecId, SpecSheet, SpecTemplate};
use proptest::prelude::*;

#[test]
fn test_boundary_values_pass() {
    assert_eq!(InspectionStatus::of(Some(0.47), 0.47, 0.53), InspectionStatus::Pass);
    assert_eq!(InspectionStatus::of(Some(0.53), 0.47, 0.53), InspectionStatus::Pass);
}

#[test]
fn test_absent_always_pending() {
    assert_eq!(InspectionStatus::of(None, 0.47, 0.53), InspectionStatus::Pending);
    assert_eq!(InspectionStatus::of(None, f64::MIN, f64::MAX), InspectionStatus::Pending);
}

proptest! {
    // Pass iff min <= actual <= max, both bounds inclusive.
    #[test]
    fn prop_pass_iff_within_inclusive_bounds(
        actual in -1000.0f64..1000.0,
        min in -1000.0f64..1000.0,
        span in 0.0f64..500.0,
    ) {
        let max = min + span;
        let status = InspectionStatus::of(Some(actual), min, max);
        let within = actual >= min && actual <= max;

        if within {
            prop_assert_eq!(status, InspectionStatus::Pass);
        } else {
            prop_assert_eq!(status, InspectionStatus::Fail);
        }
    }

    // Absent measurements are pending regardless of bounds.
    #[test]
    fn prop_absent_is_pending(min in -1000.0f64..1000.0, max in -1000.0f64..1000.0) {
        prop_assert_eq!(InspectionStatus::of(None, min, max), InspectionStatus::Pending);
    }

    // A sheet's partition always sums to its total, whatever was entered.
    #[test]
    fn prop_stats_partition_sums_to_total(
        measurements in proptest::collection::vec(proptest::option::of(-10.0f64..10.0), 1..8)
    ) {
        let rows: Vec<CharacteristicSpec> = (0..measurements.len())
            .map(|i| {
                let i_u32 = u32::try_from(i).unwrap();
                CharacteristicSpec::new(i_u32 + 1, format!("Dim {i}"), "Caliper", -1.0, 1.0)
            })
            .collect();
        let mut sheet = SpecSheet::new(SpecTemplate::new(rows).unwrap());

        for (i, m) in measurements.iter().enumerate() {
            let id = u32::try_from(i).unwrap() + 1;
            sheet.record(SpecId(id), *m);
        }

        let stats = sheet.stats();
        prop_assert_eq!(stats.passed + stats.failed + stats.pending, stats.total);
        prop_assert_eq!(stats.total, measurements.len());
    }

    // Reset always restores the exact pristine template, twice over.
    #[test]
    fn prop_reset_restores_template(
        measurements in proptest::collection::vec(proptest::option::of(-10.0f64..10.0), 1..8)
    ) {
        let rows: Vec<CharacteristicSpec> = (0..measurements.len())
            .map(|i| {
                let i_u32 = u32::try_from(i).unwrap();
                CharacteristicSpec::new(i_u32 + 1, format!("Dim {i}"), "Caliper", -1.0, 1.0)
            })
            .collect();
        let pristine = SpecTemplate::new(rows).unwrap();
        let mut sheet = SpecSheet::new(pristine.clone());

        for (i, m) in measurements.iter().enumerate() {
            let id = u32::try_from(i).unwrap() + 1;
            sheet.record(SpecId(id), *m);
        }

        sheet.reset();
        prop_assert_eq!(sheet.entries(), pristine.rows());

        sheet.reset();
        prop_assert_eq!(sheet.entries(), pristine.rows());
    }
}
