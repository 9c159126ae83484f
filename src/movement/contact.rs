//! Movement domain: per-tick contact flags and the jump cooldown.

use crate::movement::{DirectionalHits, ProbeDirection, ProbeHit};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub hits: DirectionalHits,
    pub colliding_left: bool,
    pub colliding_right: bool,
    pub colliding_above: bool,
    pub colliding_below: bool,
    /// Seconds left before another jump may trigger. Never negative.
    pub jump_cooldown: f32,
}

impl ContactState {
    /// Count the cooldown down by `dt`, stopping at zero.
    pub fn tick_cooldown(&mut self, dt: f32) {
        if self.jump_cooldown > 0.0 {
            self.jump_cooldown = (self.jump_cooldown - dt.max(0.0)).max(0.0);
        }
    }

    /// Replace the contact picture with this tick's probe results.
    ///
    /// Returns `true` on the tick the player lands, in which case the jump
    /// cooldown has been reset to `jump_wait_time`.
    pub fn apply_hits(&mut self, hits: DirectionalHits, jump_wait_time: f32) -> bool {
        let was_below = self.colliding_below;

        self.colliding_left = hits.is_touching(ProbeDirection::Left);
        self.colliding_right = hits.is_touching(ProbeDirection::Right);
        self.colliding_above = hits.is_touching(ProbeDirection::Up);
        self.colliding_below = hits.is_touching(ProbeDirection::Down);
        self.hits = hits;

        let landed = !was_below && self.colliding_below;
        if landed {
            self.jump_cooldown = jump_wait_time;
        }
        landed
    }

    pub fn is_colliding(&self, direction: ProbeDirection) -> bool {
        match direction {
            ProbeDirection::Left => self.colliding_left,
            ProbeDirection::Right => self.colliding_right,
            ProbeDirection::Up => self.colliding_above,
            ProbeDirection::Down => self.colliding_below,
        }
    }

    pub fn hit(&self, direction: ProbeDirection) -> Option<&ProbeHit> {
        self.hits.get(direction)
    }

    /// True while pressing `run` would push into a wall on that side.
    pub fn blocks_run(&self, run: f32) -> bool {
        (run < 0.0 && self.colliding_left) || (run > 0.0 && self.colliding_right)
    }
}
