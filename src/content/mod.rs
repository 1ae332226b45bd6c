//! Content domain: controller tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CameraDef, ControllerDefaults, MovementDef};

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_controller_defaults;
use crate::content::validation::validate_defaults;

/// Location of the tuning file, relative to the working directory.
pub const CONTROLLER_DEFAULTS_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControllerDefaults>()
            .add_systems(Startup, load_content);
    }
}

/// Load and validate the tuning file, falling back to built-in defaults.
fn load_content(mut commands: Commands) {
    let defaults = match load_controller_defaults(Path::new(CONTROLLER_DEFAULTS_PATH)) {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}; using built-in controller defaults", e);
            ControllerDefaults::default()
        }
    };

    let errors = validate_defaults(&defaults);
    let defaults = if errors.is_empty() {
        defaults
    } else {
        for e in &errors {
            error!("Invalid controller tuning: {}", e);
        }
        ControllerDefaults::default()
    };

    info!(
        "Controller tuning loaded: speed_limit={}, jump_force={}, mario_jump={}",
        defaults.movement.speed_limit, defaults.movement.jump_force, defaults.movement.use_mario_jump
    );

    commands.insert_resource(defaults);
}
