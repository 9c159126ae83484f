//! Movement domain: avian2d implementations of the controller's physics seams.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CastHit, RayHit, RigidBodySink, ShapeQueryProvider};

/// Cast reach when no world bounds are known.
pub const DEFAULT_MAX_CAST_DISTANCE: f32 = 10_000.0;

/// Farthest a box cast needs to travel: nothing lies beyond the world diagonal.
pub fn max_cast_distance(world: Option<Rect>) -> f32 {
    match world {
        Some(rect) if !rect.is_empty() => rect.size().length(),
        _ => DEFAULT_MAX_CAST_DISTANCE,
    }
}

/// Shape queries answered by avian's spatial query pipeline.
pub struct AvianShapeQuery<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    excluded: Option<Entity>,
    max_distance: f32,
}

impl<'a, 'w, 's> AvianShapeQuery<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            excluded: None,
            max_distance: DEFAULT_MAX_CAST_DISTANCE,
        }
    }

    /// Cap how far box casts sweep.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Never report hits against `entity` (usually the prober itself).
    pub fn excluding(mut self, entity: Entity) -> Self {
        self.excluded = Some(entity);
        self
    }

    fn filter(&self, mask: u32) -> SpatialQueryFilter {
        let filter = SpatialQueryFilter::from_mask(LayerMask(mask));
        match self.excluded {
            Some(entity) => filter.with_excluded_entities([entity]),
            None => filter,
        }
    }
}

impl ShapeQueryProvider for AvianShapeQuery<'_, '_, '_> {
    type Handle = Entity;

    fn box_cast(
        &self,
        center: Vec2,
        half_extents: Vec2,
        rotation: f32,
        direction: Dir2,
        mask: u32,
    ) -> Option<CastHit> {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        let hit = self.spatial_query.cast_shape(
            &shape,
            center,
            rotation,
            direction,
            &ShapeCastConfig::from_max_distance(self.max_distance),
            &self.filter(mask),
        )?;

        Some(CastHit {
            point: hit.point1,
            centroid: center + *direction * hit.distance,
            normal: hit.normal1,
        })
    }

    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: u32,
    ) -> Option<RayHit> {
        let hit =
            self.spatial_query
                .cast_ray(origin, direction, max_distance, true, &self.filter(mask))?;

        Some(RayHit {
            point: origin + *direction * hit.distance,
            distance: hit.distance,
            normal: hit.normal,
        })
    }

    fn overlap_area(&self, min: Vec2, max: Vec2, mask: u32) -> Option<Entity> {
        let size = (max - min).max(Vec2::ZERO);
        let shape = Collider::rectangle(size.x, size.y);
        self.spatial_query
            .shape_intersections(&shape, (min + max) * 0.5, 0.0, &self.filter(mask))
            .into_iter()
            .next()
    }

    fn overlap_circle(&self, center: Vec2, radius: f32, mask: u32) -> Option<Entity> {
        let shape = Collider::circle(radius);
        self.spatial_query
            .shape_intersections(&shape, center, 0.0, &self.filter(mask))
            .into_iter()
            .next()
    }
}

/// Rigid-body sink writing straight into avian's velocity.
pub struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    inverse_mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(velocity: &'a mut LinearVelocity, mass: &ComputedMass) -> Self {
        let mass = mass.value();
        let inverse_mass = if mass > 0.0 && mass.is_finite() {
            mass.recip()
        } else {
            0.0
        };
        Self {
            velocity,
            inverse_mass,
        }
    }
}

impl RigidBodySink for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn add_impulse(&mut self, impulse: Vec2) {
        // Impulse = mass * delta_v
        self.velocity.0 += impulse * self.inverse_mass;
    }
}
