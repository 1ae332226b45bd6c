//! Movement domain: hard-coded test room and debug drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

#[cfg(feature = "dev-tools")]
use crate::movement::{ControllerRig, PlayerMotor};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // (position, size, color)
    let blocks = [
        // Floor
        (Vec2::new(0.0, -4.0), Vec2::new(40.0, 1.0), ground_color),
        // Side walls, also ground so wall-hugging still counts as standing
        (Vec2::new(-20.5, 2.0), Vec2::new(1.0, 13.0), ground_color),
        (Vec2::new(20.5, 2.0), Vec2::new(1.0, 13.0), ground_color),
        // Platforms
        (Vec2::new(-6.0, -1.0), Vec2::new(4.0, 0.5), platform_color),
        (Vec2::new(5.0, 1.0), Vec2::new(4.0, 0.5), platform_color),
        (Vec2::new(0.0, 3.5), Vec2::new(3.0, 0.5), platform_color),
    ];

    for (position, size, color) in blocks {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}

/// Draw each controller's grounded ray, green while grounded.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_ground_rays(
    mut gizmos: Gizmos,
    controllers: Query<(&PlayerMotor, &ControllerRig)>,
    roots: Query<&Transform>,
) {
    for (motor, rig) in &controllers {
        let Ok(transform) = roots.get(rig.root) else {
            continue;
        };

        let start = transform.translation.truncate();
        let end = start - Vec2::new(0.0, rig.ground_ray_length);
        let color = if motor.is_grounded() {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.line_2d(start, end, color);
    }
}
