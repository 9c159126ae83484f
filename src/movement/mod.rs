//! Movement domain: ground probing, contact state and the player controller.

mod avian;
mod components;
mod contact;
mod controller;
mod events;
mod probe;
mod resolver;
mod settings;
mod systems;


pub use avian::{AvianBody, AvianShapeQuery, DEFAULT_MAX_CAST_DISTANCE, max_cast_distance};
pub use components::{GameLayer, Ground, MovementController, Player};
pub use contact::ContactState;
pub use controller::{
    InputSample, PlayerMovementController, RigidBodySink, SampleOutcome, TickReport,
};
pub use events::UseRequested;
pub use probe::{
    CastHit, DirectionalHits, GroundProbe, ProbeDirection, ProbeHit, RayHit, ShapeQueryProvider,
};
pub use resolver::{Inputs, MovementDecision, can_jump, resolve_movement};
pub use settings::{ControllerSettings, DEFAULT_EPSILON, ProbeStyle, SettingsError, SkinTest};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{read_input, step_controllers};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerSettings>()
            .add_message::<UseRequested>()
            .add_systems(Update, read_input.run_if(in_state(GameState::Playing)))
            .add_systems(
                FixedUpdate,
                step_controllers.run_if(in_state(GameState::Playing)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::draw_probe_hits);
    }
}
