//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Positions and sizes are world units, colors sRGB.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum ToolType {
    #[default]
    Ingot,
    Key,
}

pub type Xy = (f32, f32);
pub type Rgb = (f32, f32, f32);

pub fn to_vec2(xy: Xy) -> Vec2 {
    Vec2::new(xy.0, xy.1)
}

pub fn to_srgba(rgb: Rgb) -> Srgba {
    Srgba::rgb(rgb.0, rgb.1, rgb.2)
}

// ============================================================================
// Level layout (level.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub name: String,
    /// The camera never shows anything outside these bounds.
    pub world_min: Xy,
    pub world_max: Xy,
    pub backdrop_color: Rgb,
    pub player: PlayerDef,
    pub platforms: Vec<BlockDef>,
    pub forges: Vec<ForgeDef>,
    pub exit: Option<ExitDef>,
    pub finish_line: Option<BlockDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerDef {
    pub position: Xy,
    pub size: Xy,
    pub color: Rgb,
    pub starting_tool: ToolType,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlockDef {
    pub position: Xy,
    pub size: Xy,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForgeDef {
    pub position: Xy,
    pub size: Xy,
    pub output: ToolType,
    pub color: Rgb,
    pub usage_color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExitDef {
    pub position: Xy,
    pub size: Xy,
    pub color: Rgb,
    pub unlock_color: Rgb,
}

impl LevelDef {
    pub fn world_bounds(&self) -> Rect {
        Rect::from_corners(to_vec2(self.world_min), to_vec2(self.world_max))
    }
}

impl Default for LevelDef {
    /// Built-in fallback level used when level.ron cannot be loaded.
    fn default() -> Self {
        let ground = (0.35, 0.4, 0.35);
        let platform = (0.5, 0.4, 0.3);

        Self {
            schema_version: 1,
            name: "Fallback Forge".to_string(),
            world_min: (-640.0, -360.0),
            world_max: (1280.0, 720.0),
            backdrop_color: (0.1, 0.1, 0.15),
            player: PlayerDef {
                position: (-500.0, -200.0),
                size: (24.0, 48.0),
                color: (0.9, 0.9, 0.9),
                starting_tool: ToolType::Ingot,
            },
            platforms: vec![
                BlockDef {
                    position: (320.0, -340.0),
                    size: (1920.0, 40.0),
                    color: ground,
                },
                BlockDef {
                    position: (-620.0, 180.0),
                    size: (40.0, 1080.0),
                    color: ground,
                },
                BlockDef {
                    position: (1260.0, 180.0),
                    size: (40.0, 1080.0),
                    color: ground,
                },
                BlockDef {
                    position: (0.0, -180.0),
                    size: (200.0, 20.0),
                    color: platform,
                },
                BlockDef {
                    position: (350.0, -60.0),
                    size: (200.0, 20.0),
                    color: platform,
                },
            ],
            forges: vec![ForgeDef {
                position: (-250.0, -290.0),
                size: (60.0, 60.0),
                output: ToolType::Key,
                color: (0.6, 0.3, 0.2),
                usage_color: (1.0, 0.6, 0.1),
            }],
            exit: Some(ExitDef {
                position: (350.0, 0.0),
                size: (40.0, 100.0),
                color: (0.5, 0.2, 0.2),
                unlock_color: (0.2, 0.8, 0.2),
            }),
            finish_line: Some(BlockDef {
                position: (1100.0, -270.0),
                size: (20.0, 100.0),
                color: (0.95, 0.95, 0.3),
            }),
        }
    }
}
