//! Level domain: data-driven level spawning and the finish line.

mod components;
mod finish;
mod spawn;

pub use components::{Backdrop, FinishLine};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::finish::detect_finish_line;
use crate::level::spawn::{spawn_level, spawn_player};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_level, spawn_player).chain())
            .add_systems(
                Update,
                detect_finish_line.run_if(in_state(GameState::Playing)),
            );
    }
}
