//! Camera domain: a bounded follow camera.

mod follow;
mod systems;

#[cfg(test)]
mod tests;

pub use follow::{WorldBounds, clamp_view_center};

use bevy::prelude::*;

use crate::camera::systems::{follow_player, setup_camera};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player);
    }
}
