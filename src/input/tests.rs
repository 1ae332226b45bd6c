//! Input domain: tests for the manager singleton and input snapshot.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{App, ButtonInput, KeyCode, Vec2, World};

use super::systems::{digital_axis, read_input};
use super::{
    InputAxis, InputButton, InputManager, InputManagerError, InputPlugin, InputSource,
    PlayerInput,
};

// -----------------------------------------------------------------------------
// InputManager tests
// -----------------------------------------------------------------------------

#[test]
fn test_no_instance_before_creation() {
    let world = World::new();
    assert!(InputManager::instance(&world).is_none());
}

#[test]
fn test_create_makes_instance_available() {
    let mut world = World::new();
    let id = InputManager::create(&mut world).unwrap();

    let manager = InputManager::instance(&world).expect("manager should be live");
    assert_eq!(manager.id(), id);
}

#[test]
fn test_second_create_is_rejected_and_keeps_first() {
    let mut world = World::new();
    let first = InputManager::create(&mut world).unwrap();

    let err = InputManager::create(&mut world).unwrap_err();

    assert_eq!(err, InputManagerError::AlreadyExists(first));
    assert_eq!(InputManager::instance(&world).unwrap().id(), first);
}

#[test]
fn test_teardown_by_stale_id_keeps_instance() {
    let mut world = World::new();
    let first = InputManager::create(&mut world).unwrap();
    assert!(InputManager::teardown(&mut world, first));
    let second = InputManager::create(&mut world).unwrap();

    assert!(!InputManager::teardown(&mut world, first));
    assert_eq!(InputManager::instance(&world).unwrap().id(), second);
}

#[test]
fn test_teardown_by_current_id_clears_instance() {
    let mut world = World::new();
    let id = InputManager::create(&mut world).unwrap();

    assert!(InputManager::teardown(&mut world, id));
    assert!(InputManager::instance(&world).is_none());
    assert!(!InputManager::teardown(&mut world, id));
}

// -----------------------------------------------------------------------------
// PlayerInput tests
// -----------------------------------------------------------------------------

#[test]
fn test_player_input_axes_are_clamped() {
    let input = PlayerInput {
        axis: Vec2::new(2.0, -3.0),
        ..Default::default()
    };

    assert_eq!(input.axis(InputAxis::Horizontal), 1.0);
    assert_eq!(input.axis(InputAxis::Vertical), -1.0);
}

#[test]
fn test_player_input_buttons() {
    let input = PlayerInput {
        axis: Vec2::ZERO,
        jump_just_pressed: false,
        jump_held: true,
    };

    assert!(!input.button_down(InputButton::Jump));
    assert!(input.button_held(InputButton::Jump));
}

// -----------------------------------------------------------------------------
// Keyboard sampling tests
// -----------------------------------------------------------------------------

const NEG: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const POS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];

#[test]
fn test_digital_axis_idle_is_zero() {
    let keyboard = ButtonInput::<KeyCode>::default();
    assert_eq!(digital_axis(&keyboard, NEG, POS), 0.0);
}

#[test]
fn test_digital_axis_either_binding_works() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::ArrowLeft);
    assert_eq!(digital_axis(&keyboard, NEG, POS), -1.0);

    keyboard.release(KeyCode::ArrowLeft);
    keyboard.press(KeyCode::KeyD);
    assert_eq!(digital_axis(&keyboard, NEG, POS), 1.0);
}

#[test]
fn test_digital_axis_opposite_keys_cancel() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyA);
    keyboard.press(KeyCode::KeyD);
    assert_eq!(digital_axis(&keyboard, NEG, POS), 0.0);
}

// -----------------------------------------------------------------------------
// Per-frame hook tests
// -----------------------------------------------------------------------------

fn input_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(InputPlugin);
    app
}

#[test]
fn test_hook_samples_keyboard_while_manager_is_live() {
    let mut app = input_app();
    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::KeyD);
        keyboard.press(KeyCode::Space);
    }

    app.update();

    let input = app.world().resource::<PlayerInput>();
    assert_eq!(input.axis, Vec2::new(1.0, 0.0));
    assert!(input.jump_just_pressed);
    assert!(input.jump_held);
}

#[test]
fn test_teardown_leaves_an_idle_snapshot() {
    let mut app = input_app();
    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::Space);
    }
    app.update();

    let id = InputManager::instance(app.world()).unwrap().id();
    assert!(InputManager::teardown(app.world_mut(), id));
    assert!(!app.world().resource::<PlayerInput>().jump_just_pressed);

    // Keys are still down, but nothing samples them any more.
    app.update();
    app.update();

    let input = app.world().resource::<PlayerInput>();
    assert_eq!(input.axis, Vec2::ZERO);
    assert!(!input.button_down(InputButton::Jump));
    assert!(!input.button_held(InputButton::Jump));
}

#[test]
fn test_hook_without_manager_clears_a_stale_snapshot() {
    let mut world = World::new();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::Space);
    world.insert_resource(keyboard);
    world.insert_resource(PlayerInput {
        axis: Vec2::new(1.0, 0.0),
        jump_just_pressed: true,
        jump_held: true,
    });

    world
        .run_system_once(read_input)
        .expect("input hook should run");

    let input = world.resource::<PlayerInput>();
    assert_eq!(input.axis, Vec2::ZERO);
    assert!(!input.jump_just_pressed);
}
