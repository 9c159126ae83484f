//! Core domain: events for level flow.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// Event fired when a player touches the finish line
#[derive(Debug)]
pub struct LevelFinishedEvent {
    pub player: Entity,
}

impl Message for LevelFinishedEvent {}
