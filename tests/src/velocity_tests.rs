//! Velocity configuration properties across the whole supported range

use morse_core::{MorseError, MAX_VELOCITY_LPM, MIN_VELOCITY_LPM};
use proptest::prelude::*;

use crate::transmitter;

proptest! {
    #[test]
    fn in_range_velocity_sets_all_ratios(v in MIN_VELOCITY_LPM..=MAX_VELOCITY_LPM) {
        let mut tx = transmitter();
        prop_assert_eq!(tx.set_velocity(v), Ok(()));

        let t = *tx.timing();
        prop_assert_eq!(t.dot_ms, 3000 / v);
        prop_assert_eq!(t.dash_ms, 3 * t.dot_ms);
        prop_assert_eq!(t.element_gap_ms, t.dot_ms);
        prop_assert_eq!(t.letter_gap_ms, 3 * t.dot_ms);
        prop_assert_eq!(t.word_gap_ms, 7 * t.dot_ms);
    }

    #[test]
    fn out_of_range_velocity_changes_nothing(
        v in prop_oneof![0u32..MIN_VELOCITY_LPM, (MAX_VELOCITY_LPM + 1)..10_000],
    ) {
        let mut tx = transmitter();
        tx.set_velocity(40).unwrap();
        let before = *tx.timing();

        prop_assert_eq!(tx.set_velocity(v), Err(MorseError::VelocityOutOfRange));
        prop_assert_eq!(*tx.timing(), before);
    }

    #[test]
    fn velocity_is_idempotent(v in MIN_VELOCITY_LPM..=MAX_VELOCITY_LPM) {
        let mut tx = transmitter();
        tx.set_velocity(v).unwrap();
        let first = *tx.timing();
        tx.set_velocity(v).unwrap();
        prop_assert_eq!(*tx.timing(), first);
    }
}
