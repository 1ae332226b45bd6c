//! Movement domain: player controller plugin wiring and public exports.

mod body;
mod bootstrap;
mod components;
mod dev;
mod events;
mod motor;
mod systems;


pub use body::{AvianBody, ForceMode, MotorBody, PhysicsQuery, RayContact};
pub use components::{
    ControllerFault, ControllerRig, ControllerSetupError, GameLayer, Ground, MovementParams,
    Player, PlayerController, SpeedLimitMode,
};
pub use events::{PlayerJumped, PlayerLanded};
pub use motor::{
    FixedStep, GroundRay, HorizontalPhase, JumpPhase, MotorState, MoveDirection, PlayerMotor,
    StepOutcome,
};

use bevy::prelude::*;

use crate::core::GameState;
use crate::input::InputSampling;
use crate::movement::bootstrap::{attach_camera_to_player, bind_player_controllers, spawn_player};
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{drive_controllers, log_motor_events, update_controllers};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SpeedLimitMode>()
            .add_message::<PlayerJumped>()
            .add_message::<PlayerLanded>()
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_test_room, spawn_player),
            )
            .add_systems(
                Update,
                (bind_player_controllers, update_controllers)
                    .chain()
                    .after(InputSampling)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                attach_camera_to_player.run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, log_motor_events)
            .add_systems(
                FixedUpdate,
                drive_controllers.run_if(in_state(GameState::Playing)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            dev::draw_ground_rays.run_if(in_state(GameState::Playing)),
        );
    }
}
