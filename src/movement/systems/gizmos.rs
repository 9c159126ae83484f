//! Movement domain: dev-only visualisation of the contact probes.

use bevy::prelude::*;

use crate::movement::{MovementController, Player, ProbeDirection};

const TOUCHING_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
const NEAR_COLOR: Color = Color::srgb(0.2, 0.8, 0.9);
const MIN_MARKER_RADIUS: f32 = 3.0;

/// Mark each probe hit point: red when touching, cyan otherwise. The marker
/// is one skin width wide.
pub(crate) fn draw_probe_hits(
    mut gizmos: Gizmos,
    query: Query<&MovementController, With<Player>>,
) {
    for controller in &query {
        let contact = controller.contact();
        let radius = controller.settings().skin_width.max(MIN_MARKER_RADIUS);
        for direction in ProbeDirection::ALL {
            let Some(hit) = contact.hit(direction) else {
                continue;
            };
            let color = if contact.is_colliding(direction) {
                TOUCHING_COLOR
            } else {
                NEAR_COLOR
            };
            gizmos.circle_2d(hit.point, radius, color);
        }
    }
}
