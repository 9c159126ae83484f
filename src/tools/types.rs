//! Tools domain: held tools and the world objects that react to "use".

use bevy::prelude::*;

use crate::content::ToolType;

/// The tool the player is currently carrying.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldTool(pub ToolType);

/// A usable world object the player can stand in and activate.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum UseContext {
    /// Turns whatever the player holds into `output`.
    ToolForge { output: ToolType, usage_color: Srgba },
    /// Opens for a player carrying the key.
    LevelExit { unlock_color: Srgba },
}

/// What a successful use did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UseEffect {
    Forged { tool: ToolType, flash: Srgba },
    Unlocked { color: Srgba },
}

impl UseContext {
    /// `unlocked` is whether this entity already carries [`Unlocked`]; an
    /// open exit refuses further use.
    pub fn can_use(&self, tool: ToolType, unlocked: bool) -> bool {
        match self {
            UseContext::ToolForge { output, .. } => tool != *output,
            UseContext::LevelExit { .. } => !unlocked && tool == ToolType::Key,
        }
    }

    /// Apply the context to the player's tool. `None` when it refuses.
    pub fn use_with(&self, held: &mut HeldTool, unlocked: bool) -> Option<UseEffect> {
        if !self.can_use(held.0, unlocked) {
            return None;
        }

        Some(match *self {
            UseContext::ToolForge {
                output,
                usage_color,
            } => {
                held.0 = output;
                UseEffect::Forged {
                    tool: output,
                    flash: usage_color,
                }
            }
            UseContext::LevelExit { unlock_color } => UseEffect::Unlocked {
                color: unlock_color,
            },
        })
    }
}

/// Marker for an exit that has already been unlocked
#[derive(Component, Debug)]
pub struct Unlocked;
