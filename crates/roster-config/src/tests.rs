//! Tests for roster configuration.

use super::*;
use roster_core::PatternSlot::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        num_people = 5
        base_days = 20
        phase_offset = 8
        rotation_pattern = [
            "morning", "morning", "afternoon", "afternoon",
            "evening", "evening", "off", "off", "off", "off",
        ]
    "#;

    let config = RosterConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.num_people, 5);
    assert_eq!(config.base_days, 20);
    assert_eq!(config.phase_offset, 8);
    assert_eq!(config.rotation_pattern, RotationPattern::standard());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        num_people: 4
        base_days: 8
        phase_offset: 1
        rotation_pattern: [morning, afternoon, evening, "off"]
    "#;

    let config = RosterConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.num_people, 4);
    assert_eq!(
        config.rotation_pattern.slots(),
        &[Morning, Afternoon, Evening, Off]
    );
}

#[test]
fn test_defaults_match_source_instance() {
    let config = RosterConfig::default();
    assert_eq!(config.num_people, 6);
    assert_eq!(config.base_days, 365);
    assert_eq!(config.phase_offset, 8);
    assert_eq!(config.rotation_pattern.len(), 10);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config = RosterConfig::from_toml_str("num_people = 3").unwrap();
    assert_eq!(config.num_people, 3);
    assert_eq!(config.base_days, 365);
    assert_eq!(config.rotation_pattern, RotationPattern::standard());
}

#[test]
fn test_unknown_pattern_slot_is_rejected() {
    let toml = r#"rotation_pattern = ["morning", "night"]"#;
    assert!(matches!(
        RosterConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_builder() {
    let config = RosterConfig::new()
        .with_num_people(4)
        .with_base_days(8)
        .with_phase_offset(1)
        .with_rotation_pattern(vec![Morning, Afternoon, Evening, Off]);

    assert_eq!(config.num_people, 4);
    assert_eq!(config.num_days(), 8 + 3);
    assert_eq!(config.discard_boundary(), 3);
}

#[test]
fn test_derived_horizon() {
    let config = RosterConfig::default();
    assert_eq!(config.discard_boundary(), 40);
    assert_eq!(config.num_days(), 405);
}

#[test]
fn test_validate_rejects_zero_people() {
    let err = RosterConfig::new().with_num_people(0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_validate_rejects_zero_base_days() {
    let err = RosterConfig::new().with_base_days(0).validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_validate_rejects_empty_pattern() {
    let err = RosterConfig::new()
        .with_rotation_pattern(Vec::new())
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_validate_accepts_default() {
    assert!(RosterConfig::default().validate().is_ok());
}
