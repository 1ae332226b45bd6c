//! Camera domain: camera that trails the player.

mod components;
mod systems;


pub use components::PlayerCamera;

use bevy::prelude::*;

use crate::camera::systems::follow_target;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, follow_target);
    }
}
