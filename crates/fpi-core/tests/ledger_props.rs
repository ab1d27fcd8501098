//! Ledger and KPI invariants over arbitrary shift activity.

use fpi_core::{KpiSummary, ShiftEvent, ShiftLog, ShipmentLedger};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ledger_never_overships(
        lot_quantity in 0u32..500,
        requests in prop::collection::vec(0u32..200, 0..12),
    ) {
        let mut ledger = ShipmentLedger::new(lot_quantity);

        for request in requests {
            let before = ledger.shipped();
            match ledger.record(request) {
                Ok(()) => prop_assert_eq!(ledger.shipped(), before + request),
                Err(_) => prop_assert_eq!(ledger.shipped(), before),
            }
        }

        prop_assert!(ledger.shipped() <= ledger.lot_quantity());
        prop_assert_eq!(ledger.remaining(), ledger.lot_quantity() - ledger.shipped());
    }

    #[test]
    fn kpis_sum_production_reports(
        reports in prop::collection::vec((1u32..500, 0u32..500), 0..8),
    ) {
        let log = ShiftLog::new();
        let mut produced_total = 0u32;
        let mut defective_total = 0u32;

        for (produced, defective) in reports {
            let defective = defective.min(produced);
            produced_total += produced;
            defective_total += defective;
            log.append(ShiftEvent::ProductionReported {
                operator: "J. Okafor".to_string(),
                produced,
                defective,
            });
        }

        let kpis = KpiSummary::from_events(&log.events());
        prop_assert_eq!(kpis.produced, produced_total);
        prop_assert_eq!(kpis.defective, defective_total);

        if produced_total == 0 {
            prop_assert_eq!(kpis.defect_rate, 0.0);
        } else {
            prop_assert!(kpis.defect_rate >= 0.0 && kpis.defect_rate <= 1.0);
        }
    }
}
