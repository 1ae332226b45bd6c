//! Movement domain: per-frame and per-physics-step controller systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::input::PlayerInput;
use crate::movement::body::AvianBody;
use crate::movement::motor::{FixedStep, GroundRay};
use crate::movement::{ControllerRig, MovementParams, PlayerJumped, PlayerLanded, PlayerMotor};

/// Frame half: sample input, refresh grounded state and speed limit.
pub(crate) fn update_controllers(
    spatial_query: SpatialQuery,
    input: Res<PlayerInput>,
    mut controllers: Query<(&mut PlayerMotor, &MovementParams, &ControllerRig)>,
    roots: Query<(&Transform, Option<&LinearVelocity>)>,
) {
    for (mut motor, params, rig) in &mut controllers {
        let Ok((transform, velocity)) = roots.get(rig.root) else {
            continue;
        };

        if let Some(velocity) = velocity {
            motor.observe_velocity(velocity.0);
        }

        let ray = GroundRay {
            origin: transform.translation.truncate(),
            length: rig.ground_ray_length,
        };
        motor.frame_update(params, &*input, &spatial_query, ray);
    }
}

/// Physics half: apply queued forces, movement, braking and landing.
pub(crate) fn drive_controllers(
    time: Res<Time>,
    gravity: Res<Gravity>,
    input: Res<PlayerInput>,
    mut controllers: Query<(Entity, &mut PlayerMotor, &MovementParams, &ControllerRig)>,
    mut bodies: Query<(&mut LinearVelocity, Option<&ComputedMass>)>,
    mut jumped: MessageWriter<PlayerJumped>,
    mut landed: MessageWriter<PlayerLanded>,
) {
    let step = FixedStep {
        dt: time.delta_secs(),
        gravity: gravity.0,
    };

    for (entity, mut motor, params, rig) in &mut controllers {
        let Ok((velocity, mass)) = bodies.get_mut(rig.root) else {
            continue;
        };

        let inverse_mass = mass.map_or(1.0, |mass| mass.inverse());
        let mut body = AvianBody::new(velocity.into_inner(), inverse_mass, step.dt);
        let outcome = motor.fixed_update(params, &*input, &mut body, step);

        if outcome.jumped {
            jumped.write(PlayerJumped { controller: entity });
        }
        if outcome.landed {
            landed.write(PlayerLanded { controller: entity });
        }
    }
}

pub(crate) fn log_motor_events(
    mut jumped: MessageReader<PlayerJumped>,
    mut landed: MessageReader<PlayerLanded>,
) {
    for event in jumped.read() {
        debug!("Controller {:?} jumped", event.controller);
    }
    for event in landed.read() {
        debug!("Controller {:?} landed", event.controller);
    }
}
