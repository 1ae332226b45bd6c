//! Data definitions for the controller tuning file.
//!
//! These structs mirror assets/data/controller.ron and are converted into
//! runtime components by the camera and movement domains.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::SpeedLimitMode;

/// Schema version this build understands.
pub const CONTROLLER_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Root document (controller.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ControllerDefaults {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub camera: CameraDef,
    pub physics: PhysicsDef,
}

impl Default for ControllerDefaults {
    fn default() -> Self {
        Self {
            schema_version: CONTROLLER_SCHEMA_VERSION,
            movement: MovementDef::default(),
            camera: CameraDef::default(),
            physics: PhysicsDef::default(),
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementDef {
    /// Velocity added per physics step while a direction is held.
    pub move_acceleration: f32,
    /// Soft cap on ground speed; one increment of overshoot is kept.
    pub speed_limit: f32,
    pub on_air_speed_limit: f32,
    /// Horizontal speed removed per second after input is released.
    pub brake_speed: f32,
    pub jump_force: f32,
    pub use_mario_jump: bool,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    /// Let vertical input push the body up or down.
    pub allow_climb: bool,
    pub speed_limit_mode: SpeedLimitMode,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            move_acceleration: 0.05,
            speed_limit: 5.0,
            on_air_speed_limit: 3.5,
            brake_speed: 0.9,
            jump_force: 10.0,
            use_mario_jump: false,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            allow_climb: false,
            speed_limit_mode: SpeedLimitMode::TotalSpeed,
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CameraDef {
    pub speed: f32,
    pub follow_x: bool,
    pub follow_y: bool,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            speed: 10.0,
            follow_x: true,
            follow_y: true,
        }
    }
}

// ============================================================================
// Physics
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PhysicsDef {
    /// Downward acceleration in world units per second squared.
    pub gravity: f32,
    pub fixed_hz: f64,
}

impl Default for PhysicsDef {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            fixed_hz: 50.0,
        }
    }
}
