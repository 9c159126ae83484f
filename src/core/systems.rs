//! Core domain: level flow systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::LevelFinishedEvent;
use crate::core::state::GameState;

/// Handle a finished level - announce it and stop the run
pub(crate) fn handle_level_finished(
    mut events: MessageReader<LevelFinishedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    // Several contacts can land on the same frame; one announcement is enough.
    let Some(event) = events.read().last() else {
        return;
    };

    info!("You've Won!!! (player {:?})", event.player);
    game_state.set(GameState::Won);
}
