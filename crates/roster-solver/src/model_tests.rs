//! Tests for model construction.

use roster_config::RosterConfig;
use roster_core::PatternSlot::{Afternoon, Evening, Morning, Off};
use roster_core::RotationPattern;

use crate::model::RosterModel;

fn small_config() -> RosterConfig {
    RosterConfig::new()
        .with_num_people(4)
        .with_base_days(8)
        .with_phase_offset(1)
        .with_rotation_pattern(vec![Morning, Afternoon, Evening, Off])
}

#[test]
fn test_variable_count() {
    let config = small_config();
    let model = RosterModel::build(&config);
    // 4 people x 11 days x 3 shifts, plus 4 people x 4 phases.
    assert_eq!(config.num_days(), 11);
    assert_eq!(model.vars().len(), 4 * 11 * 3 + 4 * 4);
}

#[test]
fn test_coverage_constraint_count() {
    let config = small_config();
    let model = RosterModel::build(&config);
    // One row per (day, shift) slot.
    assert_eq!(model.coverage_constraints().len(), 11 * 3);
}

#[test]
fn test_phase_constraint_count() {
    let model = RosterModel::build(&small_config());
    assert_eq!(model.phase_constraints().len(), 4);
}

#[test]
fn test_pattern_constraint_count() {
    let config = small_config();
    let model = RosterModel::build(&config);
    // One row per (person, window start, offset, shift): windows run from
    // day 0 through num_days - cycle_len inclusive.
    let windows = 11 - 4 + 1;
    assert_eq!(
        model.pattern_constraints(&config.rotation_pattern).len(),
        4 * windows * 4 * 3
    );
}

#[test]
fn test_no_pattern_windows_on_short_horizon() {
    // A horizon shorter than one cycle has no complete window; only
    // coverage binds there.
    let config = RosterConfig::new()
        .with_num_people(2)
        .with_base_days(3)
        .with_phase_offset(0)
        .with_rotation_pattern(RotationPattern::standard().slots().to_vec());
    let model = RosterModel::build(&config);
    assert!(model.pattern_constraints(&config.rotation_pattern).is_empty());
}
