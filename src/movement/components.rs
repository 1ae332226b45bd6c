//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::MovementDef;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character; never counts as ground
    Player,
}

impl GameLayer {
    /// Every layer except the player's own.
    pub fn ground_query_mask() -> LayerMask {
        LayerMask(!GameLayer::Player.to_bits())
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Wires a controller to the body it drives and the sprite it measures.
///
/// The controller may live on the root itself or on any other entity.
/// Both references are resolved once when the component is added.
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerController {
    pub root: Option<Entity>,
    pub sprite: Option<Entity>,
}

/// Resolved references of a bound controller.
#[derive(Component, Debug, Clone, Copy)]
pub struct ControllerRig {
    pub root: Entity,
    /// Length of the downward grounded ray, from the root's origin.
    pub ground_ray_length: f32,
}

/// Attached instead of a rig when setup failed. The controller stays inert.
#[derive(Component, Debug)]
pub struct ControllerFault(pub ControllerSetupError);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerSetupError {
    MissingRoot,
    MissingSprite,
    /// The sprite has no explicit size, so its bounds are unknown.
    UnsizedSprite(Entity),
}

impl std::fmt::Display for ControllerSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerSetupError::MissingRoot => {
                write!(f, "player controller is missing the root player object")
            }
            ControllerSetupError::MissingSprite => {
                write!(f, "player controller is missing the player sprite")
            }
            ControllerSetupError::UnsizedSprite(entity) => {
                write!(f, "player sprite {:?} has no custom size", entity)
            }
        }
    }
}

impl std::error::Error for ControllerSetupError {}

/// What the speed limit is compared against while accelerating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum SpeedLimitMode {
    /// Full velocity magnitude, vertical component included.
    #[default]
    TotalSpeed,
    Horizontal,
}

/// Per-controller tuning.
#[derive(Component, Debug, Clone)]
pub struct MovementParams {
    pub move_acceleration: f32,
    pub speed_limit: f32,
    pub on_air_speed_limit: f32,
    pub brake_speed: f32,
    pub jump_force: f32,
    pub use_mario_jump: bool,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    pub allow_climb: bool,
    pub speed_limit_mode: SpeedLimitMode,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self::from(&MovementDef::default())
    }
}

impl From<&MovementDef> for MovementParams {
    fn from(def: &MovementDef) -> Self {
        Self {
            move_acceleration: def.move_acceleration,
            speed_limit: def.speed_limit,
            on_air_speed_limit: def.on_air_speed_limit,
            brake_speed: def.brake_speed,
            jump_force: def.jump_force,
            use_mario_jump: def.use_mario_jump,
            fall_multiplier: def.fall_multiplier,
            low_jump_multiplier: def.low_jump_multiplier,
            allow_climb: def.allow_climb,
            speed_limit_mode: def.speed_limit_mode,
        }
    }
}
