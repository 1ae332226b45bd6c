//! Core domain: boot flow, world camera and physics timing systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::PlayerCamera;
use crate::content::ControllerDefaults;
use crate::core::{CAMERA_SCALE, GameState};

pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

/// Push the loaded gravity and step rate into the physics world.
pub(crate) fn apply_physics_defaults(
    mut commands: Commands,
    defaults: Res<ControllerDefaults>,
    mut fixed_time: ResMut<Time<Fixed>>,
) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * defaults.physics.gravity));
    fixed_time.set_timestep_hz(defaults.physics.fixed_hz);

    info!(
        "Physics configured: gravity={}, fixed_hz={}",
        defaults.physics.gravity, defaults.physics.fixed_hz
    );
}

pub(crate) fn spawn_world_camera(mut commands: Commands, defaults: Res<ControllerDefaults>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        PlayerCamera::from(&defaults.camera),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
