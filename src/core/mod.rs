//! Core domain: game state, world camera and physics timing.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::content::ControllerDefaults;
use crate::core::systems::{apply_physics_defaults, finish_boot, spawn_world_camera};

/// World units shown per screen pixel.
pub const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(
                Update,
                finish_boot
                    .run_if(in_state(GameState::Boot))
                    .run_if(resource_exists::<ControllerDefaults>),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (apply_physics_defaults, spawn_world_camera),
            );
    }
}
