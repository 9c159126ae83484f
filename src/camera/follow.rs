//! Camera domain: keep the view on the player without leaving the world.

use bevy::prelude::*;

/// World area the camera must stay inside.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds(pub Rect);

/// Center the view on `target`, then push it back inside `world` per axis.
///
/// When the view is larger than the world on an axis it aligns to the
/// world's minimum edge.
pub fn clamp_view_center(target: Vec2, view_half_size: Vec2, world: Rect) -> Vec2 {
    Vec2::new(
        clamp_axis(target.x, view_half_size.x, world.min.x, world.max.x),
        clamp_axis(target.y, view_half_size.y, world.min.y, world.max.y),
    )
}

fn clamp_axis(target: f32, half: f32, min: f32, max: f32) -> f32 {
    if target - half < min {
        min + half
    } else if target + half > max {
        max - half
    } else {
        target
    }
}
