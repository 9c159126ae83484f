mod camera;
mod content;
mod core;
mod level;
mod movement;
mod tools;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Downward acceleration in world units per second squared.
const GRAVITY: f32 = 1800.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Forge Runner".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            camera::CameraPlugin,
            movement::MovementPlugin,
            tools::ToolsPlugin,
            level::LevelPlugin,
        ))
        .run();
}
