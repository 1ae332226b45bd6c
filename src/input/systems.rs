//! Input domain: keyboard sampling.

use bevy::prelude::*;

use crate::input::{InputManager, PlayerInput};

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

/// Raw digital axis: -1, 0 or 1. Opposite keys cancel out.
pub(crate) fn digital_axis(
    keyboard: &ButtonInput<KeyCode>,
    negative: [KeyCode; 2],
    positive: [KeyCode; 2],
) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Per-frame hook of the input manager: refresh the shared snapshot.
/// With no live manager the snapshot reads as idle.
pub(crate) fn read_input(
    manager: Option<Res<InputManager>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<PlayerInput>,
) {
    if manager.is_none() {
        *input = PlayerInput::default();
        return;
    }

    input.axis = Vec2::new(
        digital_axis(&keyboard, LEFT, RIGHT),
        digital_axis(&keyboard, DOWN, UP),
    );
    input.jump_just_pressed = keyboard.any_just_pressed(JUMP);
    input.jump_held = keyboard.any_pressed(JUMP);
}
