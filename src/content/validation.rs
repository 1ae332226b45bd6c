//! Range checks for controller tuning values.

use super::data::{CONTROLLER_SCHEMA_VERSION, ControllerDefaults};

/// Smallest and largest acceleration the controller is tuned for.
pub const ACCELERATION_RANGE: (f32, f32) = (0.001, 0.1);

/// Highest physics step rate accepted. Above this the step length rounds
/// toward zero.
pub const MAX_FIXED_HZ: f64 = 1000.0;

/// A tuning value outside its accepted range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
    pub expectation: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.expectation
        )
    }
}

macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $value:expr, $expectation:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                value: $value as f64,
                expectation: $expectation,
            });
        }
    };
}

/// Validate all tuning values.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_defaults(defaults: &ControllerDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        defaults.schema_version == CONTROLLER_SCHEMA_VERSION,
        "schema_version",
        defaults.schema_version,
        "the supported schema version"
    );

    let movement = &defaults.movement;
    let (min_accel, max_accel) = ACCELERATION_RANGE;
    check!(
        errors,
        (min_accel..=max_accel).contains(&movement.move_acceleration),
        "movement.move_acceleration",
        movement.move_acceleration,
        "between 0.001 and 0.1"
    );
    check!(
        errors,
        movement.speed_limit.is_finite() && movement.speed_limit > 0.0,
        "movement.speed_limit",
        movement.speed_limit,
        "positive and finite"
    );
    check!(
        errors,
        movement.on_air_speed_limit.is_finite() && movement.on_air_speed_limit > 0.0,
        "movement.on_air_speed_limit",
        movement.on_air_speed_limit,
        "positive and finite"
    );
    // Zero brake speed would leave the body sliding forever.
    check!(
        errors,
        movement.brake_speed.is_finite() && movement.brake_speed > 0.0,
        "movement.brake_speed",
        movement.brake_speed,
        "positive and finite"
    );
    check!(
        errors,
        movement.jump_force.is_finite() && movement.jump_force > 0.0,
        "movement.jump_force",
        movement.jump_force,
        "positive and finite"
    );
    check!(
        errors,
        movement.fall_multiplier.is_finite() && movement.fall_multiplier >= 1.0,
        "movement.fall_multiplier",
        movement.fall_multiplier,
        "finite and at least 1"
    );
    check!(
        errors,
        movement.low_jump_multiplier.is_finite() && movement.low_jump_multiplier >= 1.0,
        "movement.low_jump_multiplier",
        movement.low_jump_multiplier,
        "finite and at least 1"
    );

    check!(
        errors,
        defaults.camera.speed.is_finite() && defaults.camera.speed >= 0.0,
        "camera.speed",
        defaults.camera.speed,
        "finite and not negative"
    );

    check!(
        errors,
        defaults.physics.gravity.is_finite() && defaults.physics.gravity > 0.0,
        "physics.gravity",
        defaults.physics.gravity,
        "positive and finite"
    );
    check!(
        errors,
        defaults.physics.fixed_hz > 0.0 && defaults.physics.fixed_hz <= MAX_FIXED_HZ,
        "physics.fixed_hz",
        defaults.physics.fixed_hz,
        "positive and at most 1000"
    );

    errors
}
