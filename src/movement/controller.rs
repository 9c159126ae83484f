//! Movement domain: the per-player controller driven by an outer tick loop.
//!
//! The controller owns its contact state and input snapshot. The physics
//! world is reached only through the [`ShapeQueryProvider`] and
//! [`RigidBodySink`] handed to each call.

use bevy::prelude::*;

use crate::movement::{
    ContactState, ControllerSettings, GroundProbe, Inputs, ProbeDirection, SettingsError,
    ShapeQueryProvider, resolve_movement,
};

/// Write side of the rigid body the controller steers.
pub trait RigidBodySink {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn add_impulse(&mut self, impulse: Vec2);
}

/// Raw per-frame input as polled from the input axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub run: f32,
    pub jump: bool,
    pub use_pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome<H> {
    /// Run and jump were recorded for the next fixed tick.
    Movement,
    /// The sample was a use request; movement input was ignored. Carries the
    /// context the player is standing in, if any.
    Use(Option<H>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub landed: bool,
    pub jumped: bool,
    pub horizontal_velocity: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct PlayerMovementController<H> {
    settings: ControllerSettings,
    probe: GroundProbe,
    contact: ContactState,
    inputs: Inputs,
    use_context: Option<H>,
}

impl<H: Copy + PartialEq> PlayerMovementController<H> {
    pub fn new(settings: ControllerSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            probe: GroundProbe::from_settings(&settings),
            settings,
            contact: ContactState::default(),
            inputs: Inputs::default(),
            use_context: None,
        })
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn contact(&self) -> &ContactState {
        &self.contact
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn use_context(&self) -> Option<H> {
        self.use_context
    }

    /// Record one frame of input.
    ///
    /// A pressed use axis takes the whole sample. Otherwise the latest run
    /// value wins and a jump press is held until a fixed tick consumes it.
    pub fn on_input_sample(&mut self, sample: InputSample) -> SampleOutcome<H> {
        if sample.use_pressed {
            return SampleOutcome::Use(self.use_context);
        }

        self.inputs.run = if sample.run.is_finite() {
            sample.run.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        self.inputs.jump |= sample.jump;
        SampleOutcome::Movement
    }

    pub fn on_context_enter(&mut self, handle: H) {
        self.use_context = Some(handle);
    }

    /// Leave `handle`. Leaving a context other than the current one is a no-op.
    pub fn on_context_exit(&mut self, handle: H) {
        if self.use_context == Some(handle) {
            self.use_context = None;
        }
    }

    /// Run one fixed simulation step for a box of `half_extents` at `center`.
    pub fn on_fixed_tick<P, B>(
        &mut self,
        dt: f32,
        center: Vec2,
        half_extents: Vec2,
        provider: &P,
        body: &mut B,
    ) -> TickReport
    where
        P: ShapeQueryProvider + ?Sized,
        B: RigidBodySink + ?Sized,
    {
        self.contact.tick_cooldown(dt);

        let hits = self
            .probe
            .probe(provider, center, half_extents, &ProbeDirection::ALL);
        let landed = self.contact.apply_hits(hits, self.settings.jump_wait_time);
        if landed {
            debug!(
                "Landed: cooldown={}, below={:?}",
                self.contact.jump_cooldown, self.contact.hits.below
            );
        }

        let velocity = body.velocity();
        let decision = resolve_movement(&self.inputs, &self.contact, &self.settings, velocity.y);

        if let Some(impulse) = decision.jump_impulse {
            body.add_impulse(Vec2::new(0.0, impulse));
            self.contact.jump_cooldown = self.settings.jump_wait_time;
            debug!("Jump: impulse={}, run={}", impulse, self.inputs.run);
        }

        if let Some(vx) = decision.horizontal_velocity {
            let current = body.velocity();
            body.set_velocity(Vec2::new(vx, current.y));
        }

        self.inputs.reset();

        TickReport {
            landed,
            jumped: decision.jump_impulse.is_some(),
            horizontal_velocity: decision.horizontal_velocity,
        }
    }
}
