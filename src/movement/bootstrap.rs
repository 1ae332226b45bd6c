//! Movement domain: player spawn and controller binding.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::PlayerCamera;
use crate::content::ControllerDefaults;
use crate::movement::motor::ground_ray_length;
use crate::movement::{
    ControllerFault, ControllerRig, ControllerSetupError, GameLayer, MovementParams, Player,
    PlayerController, PlayerMotor,
};

/// Player body size in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

/// Spawn the player root, its sprite child, and the controller driving it.
pub(crate) fn spawn_player(mut commands: Commands, defaults: Res<ControllerDefaults>) {
    let root = commands
        .spawn((
            Player,
            Transform::from_xyz(0.0, 2.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                // Unit mass, so impulses read as velocity changes.
                ColliderDensity(1.0 / (PLAYER_SIZE.x * PLAYER_SIZE.y)),
                LockedAxes::ROTATION_LOCKED,
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Default, GameLayer::Ground]),
            ),
        ))
        .id();

    let sprite = commands
        .spawn((
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::default(),
            ChildOf(root),
        ))
        .id();

    commands.entity(root).insert((
        PlayerController {
            root: Some(root),
            sprite: Some(sprite),
        },
        MovementParams::from(&defaults.movement),
    ));

    info!(
        "Spawning player: root={:?}, sprite={:?}, mario_jump={}",
        root, sprite, defaults.movement.use_mario_jump
    );
}

/// Resolve the references of newly added controllers.
///
/// A root without a rigid body gets a dynamic one. A missing root or sprite
/// is fatal for that controller: the error is logged and it never moves.
pub(crate) fn bind_player_controllers(
    mut commands: Commands,
    controllers: Query<(Entity, &PlayerController, &MovementParams), Added<PlayerController>>,
    roots: Query<Has<RigidBody>>,
    sprites: Query<(&Sprite, &Transform)>,
) {
    for (entity, controller, params) in &controllers {
        let rig = resolve_rig(controller, &roots, &sprites);

        match rig {
            Ok(rig) => {
                if roots.get(rig.root).is_ok_and(|has_body| !has_body) {
                    warn!(
                        "Root {:?} has no rigid body, adding a dynamic one",
                        rig.root
                    );
                    commands.entity(rig.root).insert(RigidBody::Dynamic);
                }

                debug!(
                    "Bound controller {:?}: root={:?}, ground_ray={}",
                    entity, rig.root, rig.ground_ray_length
                );
                commands.entity(entity).insert((rig, PlayerMotor::new(params)));
            }
            Err(e) => {
                error!("Controller {:?} setup failed: {}", entity, e);
                commands.entity(entity).insert(ControllerFault(e));
            }
        }
    }
}

fn resolve_rig(
    controller: &PlayerController,
    roots: &Query<Has<RigidBody>>,
    sprites: &Query<(&Sprite, &Transform)>,
) -> Result<ControllerRig, ControllerSetupError> {
    let root = controller
        .root
        .filter(|root| roots.contains(*root))
        .ok_or(ControllerSetupError::MissingRoot)?;

    let sprite_entity = controller.sprite.ok_or(ControllerSetupError::MissingSprite)?;
    let (sprite, transform) = sprites
        .get(sprite_entity)
        .map_err(|_| ControllerSetupError::MissingSprite)?;
    let size = sprite
        .custom_size
        .ok_or(ControllerSetupError::UnsizedSprite(sprite_entity))?;

    Ok(ControllerRig {
        root,
        ground_ray_length: ground_ray_length(size, transform.scale),
    })
}

/// Point every camera without a live target at the player.
pub(crate) fn attach_camera_to_player(
    players: Query<Entity, With<Player>>,
    targets: Query<(), With<Transform>>,
    mut cameras: Query<&mut PlayerCamera>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };

    for mut camera in &mut cameras {
        if camera.target.is_none_or(|target| !targets.contains(target)) {
            camera.target = Some(player);
            debug!("Camera now following {:?}", player);
        }
    }
}
