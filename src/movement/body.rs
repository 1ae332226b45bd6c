//! Movement domain: the physics capabilities a controller needs, and their
//! avian2d implementations.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous force, integrated over one physics step.
    Force,
    /// Instant change of momentum.
    Impulse,
}

/// A rigid body the controller may push around.
pub trait MotorBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn add_force(&mut self, force: Vec2, mode: ForceMode);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayContact {
    pub entity: Entity,
    pub distance: f32,
}

/// Read-only ray queries against the physics world.
pub trait PhysicsQuery {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayContact>;
}

impl PhysicsQuery for SpatialQuery<'_, '_> {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayContact> {
        let filter = SpatialQueryFilter::from_mask(mask);
        self.cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| RayContact {
                entity: hit.entity,
                distance: hit.distance,
            })
    }
}

/// `MotorBody` over an avian body's velocity for one physics step.
pub struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    inverse_mass: f32,
    dt: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(velocity: &'a mut LinearVelocity, inverse_mass: f32, dt: f32) -> Self {
        Self {
            velocity,
            inverse_mass,
            dt,
        }
    }
}

impl MotorBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn add_force(&mut self, force: Vec2, mode: ForceMode) {
        let delta = match mode {
            ForceMode::Force => force * self.inverse_mass * self.dt,
            ForceMode::Impulse => force * self.inverse_mass,
        };
        self.velocity.0 += delta;
    }
}
