//! Level domain: markers for spawned level pieces.

use bevy::prelude::*;

/// Marker for the finish-line post
#[derive(Component, Debug)]
pub struct FinishLine;

/// Marker for the world backdrop sprite
#[derive(Component, Debug)]
pub struct Backdrop;
