//! Tools domain: held tools, forges and the locked level exit.

mod glow;
mod systems;
mod types;


pub use crate::content::ToolType;
pub use glow::{ForgeGlow, GLOW_FADE_RATE};
pub use types::{HeldTool, Unlocked, UseContext, UseEffect};

use bevy::prelude::*;

use crate::tools::systems::{apply_use_requests, fade_forge_glow, track_use_contexts};

pub struct ToolsPlugin;

impl Plugin for ToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_use_contexts, apply_use_requests, fade_forge_glow).chain(),
        );
    }
}
