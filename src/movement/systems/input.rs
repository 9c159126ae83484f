//! Movement domain: input sampling for locomotion.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{InputSample, MovementController, Player, SampleOutcome, UseRequested};
use crate::tools::HeldTool;

/// Poll the keyboard once per frame into an [`InputSample`].
pub(crate) fn poll_keyboard(keyboard: &ButtonInput<KeyCode>) -> InputSample {
    let mut run = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        run -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        run += 1.0;
    }

    InputSample {
        run,
        jump: keyboard.pressed(KeyCode::Space)
            || keyboard.pressed(KeyCode::KeyW)
            || keyboard.pressed(KeyCode::ArrowUp),
        use_pressed: keyboard.pressed(KeyCode::KeyE),
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut use_requests: MessageWriter<UseRequested>,
    mut query: Query<(Entity, &mut MovementController, Option<&HeldTool>), With<Player>>,
) {
    let sample = poll_keyboard(&keyboard);

    for (player, mut controller, tool) in &mut query {
        match controller.on_input_sample(sample) {
            SampleOutcome::Movement => {}
            SampleOutcome::Use(Some(context)) => {
                use_requests.write(UseRequested { player, context });
            }
            SampleOutcome::Use(None) => {
                // No context in reach; the held tool has no use of its own yet.
                trace!("Use pressed with nothing in reach, holding {:?}", tool);
            }
        }
    }
}
