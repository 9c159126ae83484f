//! Content domain: RON-backed controller tuning and level layout.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{BlockDef, LevelDef, ToolType, to_srgba, to_vec2};
pub use loader::load_all_content;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::ControllerSettings;

/// Directory holding controller.ron and level.ron.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ToolType>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load content before anything spawns. Falls back to built-in defaults so a
/// broken data file never leaves the level empty.
fn load_content(mut commands: Commands) {
    match load_all_content(Path::new(DATA_DIR)) {
        Ok(content) => {
            info!(
                "Loaded level '{}' with {} platforms, {} forges",
                content.level.name,
                content.level.platforms.len(),
                content.level.forges.len()
            );
            commands.insert_resource(content.settings);
            commands.insert_resource(content.level);
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!("Content failed to load, using default controller settings and level");
            commands.insert_resource(ControllerSettings::default());
            commands.insert_resource(LevelDef::default());
        }
    }
}
