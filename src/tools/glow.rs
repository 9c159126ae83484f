//! Tools domain: the forge's fade back to its resting color after a use.

use bevy::color::Mix;
use bevy::prelude::*;

/// Progress gained per second. The blend is re-applied to the current color
/// each frame, so the visible fade finishes well before progress reaches 1.
pub const GLOW_FADE_RATE: f32 = 0.05;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ForgeGlow {
    /// Resting color, captured once at spawn so repeated uses cannot drift it.
    pub base: Srgba,
    pub progress: f32,
    pub active: bool,
}

impl ForgeGlow {
    pub fn new(base: Srgba) -> Self {
        Self {
            base,
            progress: 0.0,
            active: false,
        }
    }

    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.active = true;
    }

    /// Advance the fade and return the color to show next.
    pub fn tick(&mut self, current: Srgba, dt: f32) -> Srgba {
        if !self.active {
            return current;
        }

        self.progress = (self.progress + GLOW_FADE_RATE * dt.max(0.0)).min(1.0);
        let next = current.mix(&self.base, self.progress);
        if self.progress >= 1.0 {
            self.active = false;
        }
        next
    }
}
