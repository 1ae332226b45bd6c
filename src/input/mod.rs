//! Input domain: input manager singleton and keyboard sampling.

mod manager;
mod source;
mod systems;

#[cfg(test)]
mod tests;

pub use manager::{InputManager, InputManagerError, InstanceId};
pub use source::{InputAxis, InputButton, InputSource, PlayerInput};

use bevy::prelude::*;

use crate::input::systems::read_input;

/// Runs once per frame before anything consumes `PlayerInput`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSampling;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        match InputManager::create(app.world_mut()) {
            Ok(id) => debug!("Input manager {:?} created", id),
            Err(e) => warn!("Discarding new input manager: {}", e),
        }

        app.init_resource::<PlayerInput>()
            .add_systems(Update, read_input.in_set(InputSampling));
    }
}
