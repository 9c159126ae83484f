//! Level domain: finish-line detection.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::LevelFinishedEvent;
use crate::level::FinishLine;
use crate::movement::Player;

pub(crate) fn detect_finish_line(
    mut collision_events: MessageReader<CollisionStart>,
    mut finished_events: MessageWriter<LevelFinishedEvent>,
    finish_query: Query<(), With<FinishLine>>,
    player_query: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (finish, player) in pairs {
            if finish_query.get(finish).is_ok() && player_query.get(player).is_ok() {
                finished_events.write(LevelFinishedEvent { player });
            }
        }
    }
}
