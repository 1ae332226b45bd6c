//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::data::{CONTROLLER_SCHEMA_VERSION, ControllerDefaults};
use super::loader::{load_controller_defaults, parse_controller_defaults};
use super::validation::{MAX_FIXED_HZ, validate_defaults};
use crate::movement::SpeedLimitMode;

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_file_loads_and_validates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/controller.ron");
    let defaults = load_controller_defaults(&path).expect("shipped tuning should parse");

    assert_eq!(defaults.schema_version, CONTROLLER_SCHEMA_VERSION);
    assert!(validate_defaults(&defaults).is_empty());
}

#[test]
fn test_shipped_tuning_stops_from_full_speed_within_a_second() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/controller.ron");
    let defaults = load_controller_defaults(&path).expect("shipped tuning should parse");
    let movement = &defaults.movement;

    assert!(movement.speed_limit / movement.brake_speed <= 1.0);
    assert!(movement.brake_speed > ControllerDefaults::default().movement.brake_speed);
}

#[test]
fn test_missing_sections_fall_back_to_field_defaults() {
    let text = r#"(
        schema_version: 1,
        movement: (jump_force: 12.0, use_mario_jump: true),
        camera: (follow_y: false),
        physics: (gravity: 9.81),
    )"#;

    let defaults = parse_controller_defaults(text, "inline").unwrap();

    assert_eq!(defaults.movement.jump_force, 12.0);
    assert!(defaults.movement.use_mario_jump);
    assert_eq!(defaults.movement.brake_speed, 0.9);
    assert_eq!(defaults.movement.speed_limit_mode, SpeedLimitMode::TotalSpeed);
    assert!(defaults.camera.follow_x);
    assert!(!defaults.camera.follow_y);
    assert_eq!(defaults.physics.fixed_hz, 50.0);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_controller_defaults("(schema_version: ", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_controller_defaults(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_defaults_are_valid() {
    assert!(validate_defaults(&ControllerDefaults::default()).is_empty());
}

#[test]
fn test_validation_reports_every_bad_field() {
    let mut defaults = ControllerDefaults::default();
    defaults.movement.move_acceleration = 0.5;
    defaults.movement.brake_speed = 0.0;
    defaults.movement.fall_multiplier = 0.5;
    defaults.physics.fixed_hz = 0.0;

    let fields: Vec<_> = validate_defaults(&defaults)
        .into_iter()
        .map(|e| e.field)
        .collect();

    assert_eq!(
        fields,
        vec![
            "movement.move_acceleration",
            "movement.brake_speed",
            "movement.fall_multiplier",
            "physics.fixed_hz",
        ]
    );
}

#[test]
fn test_unknown_schema_version_is_rejected() {
    let defaults = ControllerDefaults {
        schema_version: CONTROLLER_SCHEMA_VERSION + 1,
        ..ControllerDefaults::default()
    };

    let errors = validate_defaults(&defaults);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}

#[test]
fn test_non_finite_values_are_rejected() {
    let mut defaults = ControllerDefaults::default();
    defaults.movement.jump_force = f32::INFINITY;
    defaults.camera.speed = f32::NAN;
    defaults.physics.gravity = f32::INFINITY;
    defaults.physics.fixed_hz = f64::INFINITY;

    let fields: Vec<_> = validate_defaults(&defaults)
        .into_iter()
        .map(|e| e.field)
        .collect();

    assert_eq!(
        fields,
        vec![
            "movement.jump_force",
            "camera.speed",
            "physics.gravity",
            "physics.fixed_hz",
        ]
    );
}

#[test]
fn test_step_rate_above_cap_is_rejected() {
    let mut defaults = ControllerDefaults::default();
    defaults.physics.fixed_hz = 1e12;
    assert_eq!(validate_defaults(&defaults)[0].field, "physics.fixed_hz");

    defaults.physics.fixed_hz = MAX_FIXED_HZ;
    assert!(validate_defaults(&defaults).is_empty());
}

#[test]
fn test_infinite_step_rate_in_file_fails_validation() {
    let text = r#"(
        schema_version: 1,
        movement: (jump_force: 10.0),
        camera: (speed: 10.0),
        physics: (fixed_hz: inf),
    )"#;

    let defaults = parse_controller_defaults(text, "inline").unwrap();
    let errors = validate_defaults(&defaults);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "physics.fixed_hz");
}
