//! Movement domain: events raised while sampling player input.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// The player pressed use while standing in `context`.
#[derive(Debug, Clone, Copy)]
pub struct UseRequested {
    pub player: Entity,
    pub context: Entity,
}

impl Message for UseRequested {}
