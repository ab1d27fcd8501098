use fpi_disposition::{Disposition, DispositionError, LotState, ReleaseCheck};
use proptest::prelude::*;

#[test]
fn test_open_transitions() {
    assert!(LotState::can_transition(LotState::Open, LotState::Released));
    assert!(LotState::can_transition(LotState::Open, LotState::Rejected));

    // Invalid
    assert!(!LotState::can_transition(LotState::Released, LotState::Open));
    assert!(!LotState::can_transition(LotState::Rejected, LotState::Open));
    assert!(!LotState::can_transition(LotState::Released, LotState::Rejected));
    assert!(!LotState::can_transition(LotState::Rejected, LotState::Released));
}

#[test]
fn test_reject_succeeds_with_everything_pending() {
    let mut lot = Disposition::new();

    lot.reject().unwrap();
    assert!(lot.rejected());
    assert!(!lot.released());
}

proptest! {
    // Terminal states accept nothing; Open accepts exactly the two decisions.
    #[test]
    fn prop_transition_table_is_one_way(
        from in prop_oneof![
            Just(LotState::Open),
            Just(LotState::Released),
            Just(LotState::Rejected),
        ],
        to in prop_oneof![
            Just(LotState::Open),
            Just(LotState::Released),
            Just(LotState::Rejected),
        ]
    ) {
        let allowed = LotState::allowed_transitions(from);

        if LotState::can_transition(from, to) {
            prop_assert!(allowed.contains(&to));
            prop_assert_eq!(from, LotState::Open);
            prop_assert!(to.is_terminal());
        } else {
            prop_assert!(!allowed.contains(&to));
        }
    }

    // The release guard refuses exactly when the snapshot is dirty, and
    // the refusal names the dominant reason.
    #[test]
    fn prop_release_guard(total in 0usize..10, failed in 0usize..10, pending in 0usize..10) {
        prop_assume!(failed + pending <= total);

        let check = ReleaseCheck::new(total, failed, pending);
        let mut lot = Disposition::new();
        let result = lot.release(check);

        if failed > 0 {
            prop_assert_eq!(result, Err(DispositionError::FailuresPresent { failed }));
        } else if total == 0 {
            prop_assert_eq!(result, Err(DispositionError::NothingToInspect));
        } else if pending > 0 {
            prop_assert_eq!(result, Err(DispositionError::IncompleteInspection { pending }));
        } else {
            prop_assert!(result.is_ok());
            prop_assert!(lot.released());
        }

        // A refused release leaves the lot open.
        prop_assert_eq!(lot.state().is_open(), result.is_err());
    }

    // Whatever the snapshot, rejecting an open lot always succeeds and
    // any second decision is refused.
    #[test]
    fn prop_reject_unconditional_and_final(
        total in 0usize..10,
        failed in 0usize..10,
        pending in 0usize..10,
    ) {
        let mut lot = Disposition::new();
        lot.reject().unwrap();

        prop_assert!(lot.rejected());
        prop_assert_eq!(
            lot.release(ReleaseCheck::new(total, failed, pending)),
            Err(DispositionError::AlreadyDecided(LotState::Rejected))
        );
        prop_assert_eq!(lot.reject(), Err(DispositionError::AlreadyDecided(LotState::Rejected)));
    }
}
