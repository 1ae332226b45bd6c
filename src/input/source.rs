//! Input domain: the input capability consumed by controllers.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputButton {
    Jump,
}

/// Read-only view of the player's input for the current frame.
pub trait InputSource {
    /// Axis value in [-1, 1]; zero when idle.
    fn axis(&self, axis: InputAxis) -> f32;
    /// True only on the frame the button went down.
    fn button_down(&self, button: InputButton) -> bool;
    /// True for every frame the button is held.
    fn button_held(&self, button: InputButton) -> bool;
}

/// Snapshot of the keyboard, refreshed once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlayerInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}

impl InputSource for PlayerInput {
    fn axis(&self, axis: InputAxis) -> f32 {
        let value = match axis {
            InputAxis::Horizontal => self.axis.x,
            InputAxis::Vertical => self.axis.y,
        };
        value.clamp(-1.0, 1.0)
    }

    fn button_down(&self, button: InputButton) -> bool {
        match button {
            InputButton::Jump => self.jump_just_pressed,
        }
    }

    fn button_held(&self, button: InputButton) -> bool {
        match button {
            InputButton::Jump => self.jump_held,
        }
    }
}
