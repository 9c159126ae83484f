//! Movement domain: controller tuning and its validation.

use avian2d::prelude::PhysicsLayer;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Reference tolerance for every "near zero" comparison the resolver makes.
pub const DEFAULT_EPSILON: f32 = 0.001;

/// How the ground probe asks the physics world about contacts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub enum ProbeStyle {
    /// Shrunken box cast in each cardinal direction.
    #[default]
    BoxCast,
    /// Single ray from the center, reaching one skin width past the box edge.
    RayCast,
    /// Thin area below the feet. Only reports the downward direction.
    OverlapArea,
    /// Circle centered on the feet. Only reports the downward direction.
    OverlapCircle { radius: f32 },
}

/// Policy used to turn a box-cast travel distance into a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SkinTest {
    /// `distance_sq < skin_width`. Mixes units, kept for parity with older tuning.
    SquaredDistance,
    /// `distance_sq < skin_width^2`.
    #[default]
    Distance,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Horizontal speed while standing on ground.
    pub max_speed: f32,
    /// Horizontal speed while airborne.
    pub max_speed_air: f32,
    /// Magnitude of the upward impulse applied by a jump.
    pub jump_scale: f32,
    /// Lockout in seconds after landing or jumping before the next jump.
    pub jump_wait_time: f32,
    pub skin_width: f32,
    /// Physics layer bits that count as ground.
    pub ground_mask: u32,
    pub epsilon: f32,
    pub probe_style: ProbeStyle,
    pub skin_test: SkinTest,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            max_speed: 15.0,
            max_speed_air: 5.0,
            jump_scale: 1500.0,
            jump_wait_time: 0.25,
            skin_width: 0.06,
            ground_mask: GameLayer::Ground.to_bits(),
            epsilon: DEFAULT_EPSILON,
            probe_style: ProbeStyle::default(),
            skin_test: SkinTest::default(),
        }
    }
}

impl ControllerSettings {
    /// Check every tunable once, before any controller is built from it.
    pub fn validate(&self) -> Result<(), SettingsError> {
        non_negative("max_speed", self.max_speed)?;
        non_negative("max_speed_air", self.max_speed_air)?;
        positive("jump_scale", self.jump_scale)?;
        non_negative("jump_wait_time", self.jump_wait_time)?;
        positive("skin_width", self.skin_width)?;
        positive("epsilon", self.epsilon)?;
        if self.epsilon >= 1.0 {
            return Err(SettingsError::EpsilonSwallowsRun {
                value: self.epsilon,
            });
        }

        if self.ground_mask == 0 {
            return Err(SettingsError::EmptyGroundMask);
        }

        if let ProbeStyle::OverlapCircle { radius } = self.probe_style {
            positive("probe_style.radius", radius)?;
        }

        Ok(())
    }

    /// Speed cap for the current contact situation.
    pub fn speed_cap(&self, grounded: bool) -> f32 {
        if grounded {
            self.max_speed
        } else {
            self.max_speed_air
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonFinite { field })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(SettingsError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(SettingsError::NotPositive { field, value });
    }
    Ok(())
}

/// Malformed controller tuning, detected at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    NonFinite { field: &'static str },
    Negative { field: &'static str, value: f32 },
    NotPositive { field: &'static str, value: f32 },
    EmptyGroundMask,
    /// Run input is clamped to `[-1, 1]`, so it can never exceed this epsilon.
    EpsilonSwallowsRun { value: f32 },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "'{}' must be a finite number", field),
            Self::Negative { field, value } => {
                write!(f, "'{}' must not be negative (got {})", field, value)
            }
            Self::NotPositive { field, value } => {
                write!(f, "'{}' must be greater than zero (got {})", field, value)
            }
            Self::EmptyGroundMask => write!(f, "'ground_mask' selects no physics layers"),
            Self::EpsilonSwallowsRun { value } => {
                write!(f, "'epsilon' must be below 1.0 or no run input registers (got {})", value)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
