//! Inertial cube spin driven by pointer velocity.
//!
//! Pointer deltas feed angular velocity; every frame the angle blends toward
//! `angle + velocity` and the velocity decays, so the cube coasts to a stop
//! once the pointer rests.

use crate::config::CubeConfig;
use crate::geometry::{finite_or_zero, lerp_vec2};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default)]
pub struct CubeRotation {
    config: CubeConfig,
    /// Degrees around X (`.x`) and Y (`.y`).
    angle: Vec2,
    velocity: Vec2,
    last_pointer: Option<Vec2>,
}

impl CubeRotation {
    pub fn new(config: CubeConfig) -> Self {
        Self {
            config,
            angle: Vec2::ZERO,
            velocity: Vec2::ZERO,
            last_pointer: None,
        }
    }

    /// Accumulates one pointer move. The first move only records the
    /// position so the cube does not jump from the origin.
    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        // Deltas add to the current velocity instead of replacing it, so
        // steady motion settles at `delta * speed_factor / (1 - decay)`.
        if let Some(last) = self.last_pointer.replace(pointer) {
            let delta = pointer - last;
            self.velocity.x += finite_or_zero(-delta.y * self.config.speed_factor);
            self.velocity.y += finite_or_zero(delta.x * self.config.speed_factor);
        }
    }

    /// Drops any spin and forgets the last pointer position. The angle is
    /// kept, and the next move only seeds the position again.
    pub fn reset_input(&mut self) {
        self.velocity = Vec2::ZERO;
        self.last_pointer = None;
    }

    /// Advances one frame and returns the new angles.
    pub fn step(&mut self) -> Vec2 {
        self.angle = lerp_vec2(self.angle, self.angle + self.velocity, self.config.blend);
        self.velocity *= self.config.decay;
        self.angle
    }

    pub fn angle(&self) -> Vec2 {
        self.angle
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}
