//! Tests for domain types.

use crate::domain::*;

mod shift_kind {
    use super::*;

    #[test]
    fn test_indices_are_stable() {
        assert_eq!(ShiftKind::Morning.index(), 0);
        assert_eq!(ShiftKind::Afternoon.index(), 1);
        assert_eq!(ShiftKind::Evening.index(), 2);
        for (i, kind) in ShiftKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ShiftKind::Morning.to_string(), "Morning");
        assert_eq!(ShiftKind::Afternoon.to_string(), "Afternoon");
        assert_eq!(ShiftKind::Evening.to_string(), "Evening");
    }
}

mod pattern_slot {
    use super::*;

    #[test]
    fn test_shift_mapping() {
        assert_eq!(PatternSlot::Morning.shift(), Some(ShiftKind::Morning));
        assert_eq!(PatternSlot::Evening.shift(), Some(ShiftKind::Evening));
        assert_eq!(PatternSlot::Off.shift(), None);
    }

    #[test]
    fn test_on_duty() {
        assert!(PatternSlot::Afternoon.is_on_duty());
        assert!(!PatternSlot::Off.is_on_duty());
    }
}

mod rotation_pattern {
    use super::*;

    #[test]
    fn test_standard_pattern_shape() {
        let pattern = RotationPattern::standard();
        assert_eq!(pattern.len(), 10);
        assert_eq!(pattern.on_duty_slots(), 6);
        assert_eq!(pattern.slot_at(0), PatternSlot::Morning);
        assert_eq!(pattern.slot_at(5), PatternSlot::Evening);
        assert_eq!(pattern.slot_at(9), PatternSlot::Off);
    }

    #[test]
    fn test_slot_at_wraps() {
        let pattern = RotationPattern::standard();
        assert_eq!(pattern.slot_at(10), pattern.slot_at(0));
        assert_eq!(pattern.slot_at(23), pattern.slot_at(3));
    }
}

mod roster {
    use super::*;

    #[test]
    fn test_entries_sorted_by_day_then_shift_name() {
        let roster = Roster::from_entries(vec![
            RosterEntry { person: 1, day: 2, shift: ShiftKind::Morning },
            RosterEntry { person: 2, day: 1, shift: ShiftKind::Morning },
            RosterEntry { person: 3, day: 1, shift: ShiftKind::Evening },
            RosterEntry { person: 4, day: 1, shift: ShiftKind::Afternoon },
        ]);

        let shifts: Vec<(u32, ShiftKind)> =
            roster.iter().map(|e| (e.day, e.shift)).collect();
        // Lexical name order within a day: Afternoon, Evening, Morning.
        assert_eq!(
            shifts,
            vec![
                (1, ShiftKind::Afternoon),
                (1, ShiftKind::Evening),
                (1, ShiftKind::Morning),
                (2, ShiftKind::Morning),
            ]
        );
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::from_entries(Vec::new());
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }
}
