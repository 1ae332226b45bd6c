//! Camera domain: follow camera component.

use bevy::prelude::*;

use crate::content::CameraDef;

/// Eases its entity toward `target` once per physics step.
#[derive(Component, Debug, Clone)]
pub struct PlayerCamera {
    pub target: Option<Entity>,
    /// Fraction of the remaining distance covered per second.
    pub speed: f32,
    pub follow_x: bool,
    pub follow_y: bool,
}

impl From<&CameraDef> for PlayerCamera {
    fn from(def: &CameraDef) -> Self {
        Self {
            target: None,
            speed: def.speed,
            follow_x: def.follow_x,
            follow_y: def.follow_y,
        }
    }
}

impl PlayerCamera {
    /// Position after one step of `dt` seconds toward `target`.
    /// Disabled axes keep their current value.
    pub fn follow_step(&self, current: Vec2, target: Vec2, dt: f32) -> Vec2 {
        let t = (self.speed * dt).clamp(0.0, 1.0);
        let mut next = current;

        if self.follow_x {
            next.x = current.x.lerp(target.x, t);
        }
        if self.follow_y {
            next.y = current.y.lerp(target.y, t);
        }

        next
    }
}
