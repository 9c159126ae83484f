//! Core domain: game state and level flow wiring.

mod events;
mod state;
mod systems;

pub use events::LevelFinishedEvent;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::handle_level_finished;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<LevelFinishedEvent>()
            .add_systems(
                Update,
                handle_level_finished.run_if(in_state(GameState::Playing)),
            );
    }
}
