//! Movement domain: per-tick movement decisions from input and contacts.

use crate::movement::{ContactState, ControllerSettings};

/// Input snapshot consumed by one fixed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Inputs {
    /// Signed run axis in `[-1, 1]`.
    pub run: f32,
    pub jump: bool,
}

impl Inputs {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What one tick wants done to the rigid body. `None` leaves it alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementDecision {
    pub horizontal_velocity: Option<f32>,
    pub jump_impulse: Option<f32>,
}

pub fn can_jump(contact: &ContactState, settings: &ControllerSettings, vertical_velocity: f32) -> bool {
    contact.colliding_below
        && contact.jump_cooldown <= 0.0
        && vertical_velocity.abs() < settings.epsilon
}

/// Map input plus contact state to a movement decision.
///
/// Horizontal velocity is overwritten, never accumulated, and is left
/// untouched when there is no meaningful run input or the run pushes into a
/// wall. There is no friction model.
pub fn resolve_movement(
    inputs: &Inputs,
    contact: &ContactState,
    settings: &ControllerSettings,
    vertical_velocity: f32,
) -> MovementDecision {
    let horizontal_velocity = (inputs.run.abs() > settings.epsilon
        && !contact.blocks_run(inputs.run))
    .then(|| inputs.run * settings.speed_cap(contact.colliding_below));

    let jump_impulse = (inputs.jump && can_jump(contact, settings, vertical_velocity))
        .then_some(settings.jump_scale);

    MovementDecision {
        horizontal_velocity,
        jump_impulse,
    }
}
