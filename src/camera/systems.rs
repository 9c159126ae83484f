//! Camera domain: camera spawn and follow systems.

use bevy::prelude::*;

use crate::camera::{WorldBounds, clamp_view_center};
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn follow_player(
    bounds: Option<Res<WorldBounds>>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<(&mut Transform, &Projection), With<Camera2d>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    let target = player.translation.truncate();

    for (mut transform, projection) in &mut camera_query {
        let center = match (&bounds, projection) {
            (Some(bounds), Projection::Orthographic(ortho)) => {
                clamp_view_center(target, ortho.area.half_size(), bounds.0)
            }
            _ => target,
        };
        // Keep depth so the camera stays in front of the sprites.
        transform.translation = center.extend(transform.translation.z);
    }
}
