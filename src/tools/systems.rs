//! Tools domain: use-context tracking, use dispatch and forge glow.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{MovementController, Player, UseRequested};
use crate::tools::{ForgeGlow, HeldTool, Unlocked, UseContext, UseEffect};

/// Feed sensor enter/exit contacts into each player's controller.
pub(crate) fn track_use_contexts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    context_query: Query<(), With<UseContext>>,
    mut player_query: Query<&mut MovementController, With<Player>>,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (player, context) in pairs {
            if context_query.get(context).is_err() {
                continue;
            }
            if let Ok(mut controller) = player_query.get_mut(player) {
                debug!("Player {:?} entered use context {:?}", player, context);
                controller.on_context_enter(context);
            }
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (player, context) in pairs {
            if context_query.get(context).is_err() {
                continue;
            }
            if let Ok(mut controller) = player_query.get_mut(player) {
                debug!("Player {:?} left use context {:?}", player, context);
                controller.on_context_exit(context);
            }
        }
    }
}

pub(crate) fn apply_use_requests(
    mut commands: Commands,
    mut requests: MessageReader<UseRequested>,
    mut player_query: Query<&mut HeldTool, With<Player>>,
    mut context_query: Query<(
        &UseContext,
        &mut Sprite,
        Option<&mut ForgeGlow>,
        Has<Unlocked>,
    )>,
) {
    for request in requests.read() {
        let Ok(mut held) = player_query.get_mut(request.player) else {
            continue;
        };
        let Ok((context, mut sprite, glow, unlocked)) = context_query.get_mut(request.context) else {
            warn!("Use requested on missing context {:?}", request.context);
            continue;
        };

        match context.use_with(&mut held, unlocked) {
            Some(UseEffect::Forged { tool, flash }) => {
                info!("Forged {:?} for player {:?}", tool, request.player);
                sprite.color = flash.into();
                if let Some(mut glow) = glow {
                    glow.restart();
                }
            }
            Some(UseEffect::Unlocked { color }) => {
                info!("Level exit {:?} unlocked", request.context);
                sprite.color = color.into();
                commands.entity(request.context).insert(Unlocked);
            }
            None => {}
        }
    }
}

pub(crate) fn fade_forge_glow(time: Res<Time>, mut query: Query<(&mut ForgeGlow, &mut Sprite)>) {
    let dt = time.delta_secs();

    for (mut glow, mut sprite) in &mut query {
        if !glow.active {
            continue;
        }
        let current = sprite.color.to_srgba();
        sprite.color = glow.tick(current, dt).into();
    }
}
