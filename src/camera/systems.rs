//! Camera domain: fixed-step follow.

use bevy::prelude::*;

use crate::camera::PlayerCamera;

pub(crate) fn follow_target(
    time: Res<Time>,
    mut cameras: Query<(&PlayerCamera, &mut Transform)>,
    targets: Query<&Transform, Without<PlayerCamera>>,
) {
    let dt = time.delta_secs();

    for (camera, mut transform) in &mut cameras {
        // A despawned target is treated like no target.
        let Some(target) = camera.target.and_then(|entity| targets.get(entity).ok()) else {
            continue;
        };

        let next = camera.follow_step(
            transform.translation.truncate(),
            target.translation.truncate(),
            dt,
        );
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
