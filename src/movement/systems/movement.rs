//! Movement domain: fixed-tick controller stepping against avian.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::WorldBounds;
use crate::movement::{AvianBody, AvianShapeQuery, MovementController, Player, max_cast_distance};

/// Fallback half extents when the player collider is not a box.
const DEFAULT_HALF_EXTENTS: Vec2 = Vec2::new(12.0, 24.0);

pub(crate) fn step_controllers(
    time: Res<Time>,
    bounds: Option<Res<WorldBounds>>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &ComputedMass,
            &mut LinearVelocity,
            &mut MovementController,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let reach = max_cast_distance(bounds.map(|b| b.0));

    for (entity, transform, collider, mass, mut velocity, mut controller) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => DEFAULT_HALF_EXTENTS,
        };
        let center = transform.translation.truncate();

        let provider = AvianShapeQuery::new(&spatial_query)
            .excluding(entity)
            .with_max_distance(reach);
        let mut body = AvianBody::new(&mut velocity, mass);

        let report = controller.on_fixed_tick(dt, center, half_extents, &provider, &mut body);

        if report.jumped {
            trace!("Player {:?} jumped from {:?}", entity, center);
        }
    }
}
