//! Movement domain: cardinal contact probing against the ground layers.
//!
//! The probe never talks to a physics engine directly. It issues primitive
//! shape queries through [`ShapeQueryProvider`] and turns the answers into
//! per-direction hit records with a touch/no-touch verdict.

use bevy::prelude::*;

use crate::movement::{ControllerSettings, ProbeStyle, SkinTest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ProbeDirection {
    pub const ALL: [ProbeDirection; 4] = [
        ProbeDirection::Left,
        ProbeDirection::Right,
        ProbeDirection::Up,
        ProbeDirection::Down,
    ];

    pub fn dir(self) -> Dir2 {
        match self {
            ProbeDirection::Left => Dir2::NEG_X,
            ProbeDirection::Right => Dir2::X,
            ProbeDirection::Up => Dir2::Y,
            ProbeDirection::Down => Dir2::NEG_Y,
        }
    }

    /// Distance from the box center to its edge on this direction's axis.
    fn reach(self, half_extents: Vec2) -> f32 {
        match self {
            ProbeDirection::Left | ProbeDirection::Right => half_extents.x,
            ProbeDirection::Up | ProbeDirection::Down => half_extents.y,
        }
    }
}

/// Result of a box cast: where it hit and where the box center stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    pub point: Vec2,
    pub centroid: Vec2,
    pub normal: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    pub distance: f32,
    pub normal: Vec2,
}

/// Primitive spatial queries against the current physics snapshot.
///
/// Every call is a single, non-blocking lookup; `mask` holds the layer bits
/// that may be hit.
pub trait ShapeQueryProvider {
    /// Opaque reference to a collider found by an overlap query.
    type Handle: Copy + std::fmt::Debug;

    fn box_cast(
        &self,
        center: Vec2,
        half_extents: Vec2,
        rotation: f32,
        direction: Dir2,
        mask: u32,
    ) -> Option<CastHit>;

    fn ray_cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: u32,
    ) -> Option<RayHit>;

    fn overlap_area(&self, min: Vec2, max: Vec2, mask: u32) -> Option<Self::Handle>;

    fn overlap_circle(&self, center: Vec2, radius: f32, mask: u32) -> Option<Self::Handle>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub point: Vec2,
    pub normal: Vec2,
    /// Squared distance from the probed center to the hit reference point.
    pub distance_sq: f32,
    pub touching: bool,
}

/// One optional hit per cardinal direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionalHits {
    pub left: Option<ProbeHit>,
    pub right: Option<ProbeHit>,
    pub above: Option<ProbeHit>,
    pub below: Option<ProbeHit>,
}

impl DirectionalHits {
    pub fn get(&self, direction: ProbeDirection) -> Option<&ProbeHit> {
        match direction {
            ProbeDirection::Left => self.left.as_ref(),
            ProbeDirection::Right => self.right.as_ref(),
            ProbeDirection::Up => self.above.as_ref(),
            ProbeDirection::Down => self.below.as_ref(),
        }
    }

    pub fn set(&mut self, direction: ProbeDirection, hit: Option<ProbeHit>) {
        match direction {
            ProbeDirection::Left => self.left = hit,
            ProbeDirection::Right => self.right = hit,
            ProbeDirection::Up => self.above = hit,
            ProbeDirection::Down => self.below = hit,
        }
    }

    pub fn is_touching(&self, direction: ProbeDirection) -> bool {
        self.get(direction).is_some_and(|hit| hit.touching)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    pub style: ProbeStyle,
    pub skin_test: SkinTest,
    pub skin: f32,
    pub mask: u32,
}

impl GroundProbe {
    pub fn from_settings(settings: &ControllerSettings) -> Self {
        Self {
            style: settings.probe_style,
            skin_test: settings.skin_test,
            skin: settings.skin_width,
            mask: settings.ground_mask,
        }
    }

    /// Probe every requested direction around a box at `center`.
    /// Directions that were not requested stay `None`.
    pub fn probe<P>(
        &self,
        provider: &P,
        center: Vec2,
        half_extents: Vec2,
        directions: &[ProbeDirection],
    ) -> DirectionalHits
    where
        P: ShapeQueryProvider + ?Sized,
    {
        let mut hits = DirectionalHits::default();
        for &direction in directions {
            hits.set(
                direction,
                self.probe_direction(provider, center, half_extents, direction),
            );
        }
        hits
    }

    pub fn probe_direction<P>(
        &self,
        provider: &P,
        center: Vec2,
        half_extents: Vec2,
        direction: ProbeDirection,
    ) -> Option<ProbeHit>
    where
        P: ShapeQueryProvider + ?Sized,
    {
        match self.style {
            ProbeStyle::BoxCast => self.box_cast(provider, center, half_extents, direction),
            ProbeStyle::RayCast => self.ray_cast(provider, center, half_extents, direction),
            ProbeStyle::OverlapArea => {
                if direction != ProbeDirection::Down {
                    return None;
                }
                let feet = feet_of(center, half_extents);
                // Inset horizontally so a wall beside the feet is not ground.
                let half_width = (half_extents.x - self.skin).max(0.0);
                let min = Vec2::new(center.x - half_width, feet.y - self.skin);
                let max = Vec2::new(center.x + half_width, feet.y);
                provider
                    .overlap_area(min, max, self.mask)
                    .map(|_| self.overlap_hit(center, feet))
            }
            ProbeStyle::OverlapCircle { radius } => {
                if direction != ProbeDirection::Down {
                    return None;
                }
                let feet = feet_of(center, half_extents);
                provider
                    .overlap_circle(feet, radius, self.mask)
                    .map(|_| self.overlap_hit(center, feet))
            }
        }
    }

    fn box_cast<P>(
        &self,
        provider: &P,
        center: Vec2,
        half_extents: Vec2,
        direction: ProbeDirection,
    ) -> Option<ProbeHit>
    where
        P: ShapeQueryProvider + ?Sized,
    {
        // Shrink on both axes so side casts do not scrape the floor and the
        // floor cast does not scrape the walls.
        let shrunk = (half_extents - Vec2::splat(self.skin * 0.5)).max(Vec2::ZERO);
        let hit = provider.box_cast(center, shrunk, 0.0, direction.dir(), self.mask)?;
        let distance_sq = center.distance_squared(hit.centroid);

        Some(ProbeHit {
            point: hit.point,
            normal: hit.normal,
            distance_sq,
            touching: self.within_skin(distance_sq),
        })
    }

    fn ray_cast<P>(
        &self,
        provider: &P,
        center: Vec2,
        half_extents: Vec2,
        direction: ProbeDirection,
    ) -> Option<ProbeHit>
    where
        P: ShapeQueryProvider + ?Sized,
    {
        let reach = direction.reach(half_extents);
        let hit = provider.ray_cast(center, direction.dir(), reach + self.skin, self.mask)?;

        Some(ProbeHit {
            point: hit.point,
            normal: hit.normal,
            distance_sq: hit.distance * hit.distance,
            touching: hit.distance - reach <= self.skin,
        })
    }

    fn overlap_hit(&self, center: Vec2, feet: Vec2) -> ProbeHit {
        ProbeHit {
            point: feet,
            normal: Vec2::Y,
            distance_sq: center.distance_squared(feet),
            touching: true,
        }
    }

    fn within_skin(&self, distance_sq: f32) -> bool {
        match self.skin_test {
            SkinTest::SquaredDistance => distance_sq < self.skin,
            SkinTest::Distance => distance_sq < self.skin * self.skin,
        }
    }
}

fn feet_of(center: Vec2, half_extents: Vec2) -> Vec2 {
    Vec2::new(center.x, center.y - half_extents.y)
}
