//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::PlayerMovementController;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Platforms, walls and anything else the player can stand on or bump into
    Ground,
    /// Player character
    Player,
    /// Sensors (forges, exits) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// The player's movement controller. Use contexts are tracked by entity.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct MovementController(pub PlayerMovementController<Entity>);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
