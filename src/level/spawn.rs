//! Level domain: spawning the level and the player from `LevelDef`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::WorldBounds;
use crate::content::{BlockDef, LevelDef, to_srgba, to_vec2};
use crate::level::{Backdrop, FinishLine};
use crate::movement::{
    ControllerSettings, GameLayer, Ground, MovementController, Player, PlayerMovementController,
};
use crate::tools::{ForgeGlow, HeldTool, UseContext};

pub(crate) fn spawn_level(mut commands: Commands, level: Res<LevelDef>) {
    let bounds = level.world_bounds();
    commands.insert_resource(WorldBounds(bounds));

    // Backdrop
    commands.spawn((
        Backdrop,
        Sprite {
            color: to_srgba(level.backdrop_color).into(),
            custom_size: Some(bounds.size()),
            ..default()
        },
        Transform::from_translation(bounds.center().extend(-10.0)),
    ));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    for platform in &level.platforms {
        commands.spawn((
            Ground,
            block_sprite(platform),
            Transform::from_translation(to_vec2(platform.position).extend(0.0)),
            RigidBody::Static,
            block_collider(platform),
            ground_layers,
        ));
    }

    for forge in &level.forges {
        let size = to_vec2(forge.size);
        let base = to_srgba(forge.color);
        commands.spawn((
            UseContext::ToolForge {
                output: forge.output,
                usage_color: to_srgba(forge.usage_color),
            },
            ForgeGlow::new(base),
            Sprite {
                color: base.into(),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(to_vec2(forge.position).extend(-1.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    if let Some(exit) = &level.exit {
        let size = to_vec2(exit.size);
        commands.spawn((
            UseContext::LevelExit {
                unlock_color: to_srgba(exit.unlock_color),
            },
            Sprite {
                color: to_srgba(exit.color).into(),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(to_vec2(exit.position).extend(-1.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    if let Some(finish) = &level.finish_line {
        commands.spawn((
            FinishLine,
            block_sprite(finish),
            Transform::from_translation(to_vec2(finish.position).extend(0.0)),
            RigidBody::Static,
            block_collider(finish),
            CollisionEventsEnabled,
            ground_layers,
        ));
    }

    info!(
        "Spawned level '{}': bounds {:?}..{:?}",
        level.name, bounds.min, bounds.max
    );
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<LevelDef>,
    settings: Res<ControllerSettings>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = match PlayerMovementController::new(settings.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Refusing to spawn player with invalid controller settings: {}", e);
            return;
        }
    };

    let def = &level.player;
    let size = to_vec2(def.size);

    info!(
        "Spawning player at {:?} holding {:?} (probe {:?}, skin {})",
        def.position, def.starting_tool, settings.probe_style, settings.skin_width
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementController(controller),
            HeldTool(def.starting_tool),
        ),
        // Rendering
        Sprite {
            color: to_srgba(def.color).into(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(to_vec2(def.position).extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            // Unit mass keeps jump_scale in velocity units.
            Mass(1.0),
            NoAutoMass,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}

fn block_sprite(block: &BlockDef) -> Sprite {
    Sprite {
        color: to_srgba(block.color).into(),
        custom_size: Some(to_vec2(block.size)),
        ..default()
    }
}

fn block_collider(block: &BlockDef) -> Collider {
    let size = to_vec2(block.size);
    Collider::rectangle(size.x, size.y)
}
