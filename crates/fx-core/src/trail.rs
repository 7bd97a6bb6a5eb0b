//! Comet-tail trail: a chain of first-order filters where slot 0 follows the
//! pointer and every later slot lags its predecessor.

use crate::config::TrailConfig;
use crate::constants::TRAIL_INLINE;
use crate::geometry::{lerp, lerp_vec2};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

pub struct Trail {
    config: TrailConfig,
    path: SmallVec<[Vec2; TRAIL_INLINE]>,
    active: bool,
}

impl Trail {
    /// All slots start at the origin and the trail starts inactive.
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            path: smallvec![Vec2::ZERO; config.count],
            active: false,
        }
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer entered (`true`) or left (`false`) the host region.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn points(&self) -> &[Vec2] {
        &self.path
    }

    /// Moves the chain one frame toward `pointer`. Does nothing and returns
    /// `false` while inactive.
    pub fn step(&mut self, pointer: Vec2) -> bool {
        if !self.active || self.path.is_empty() {
            return false;
        }
        self.path[0] = pointer;
        // In place: slot i chases the already-updated slot i - 1.
        for i in 1..self.path.len() {
            self.path[i] = lerp_vec2(self.path[i], self.path[i - 1], self.config.smoothing);
        }
        true
    }

    /// Dot diameter in px; slot 0 is the largest.
    pub fn dot_size(&self, index: usize) -> f32 {
        let n = self.path.len() as f32;
        let t = (n - index as f32) / n;
        lerp(self.config.size_end, self.config.size_start, t)
    }

    /// Fades linearly from 1 at slot 0 toward 0 at the tail.
    pub fn dot_opacity(&self, index: usize) -> f32 {
        1.0 - index as f32 / self.path.len() as f32
    }
}
