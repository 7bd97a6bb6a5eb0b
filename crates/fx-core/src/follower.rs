use crate::config::FollowerConfig;
use crate::geometry::lerp_vec2;
use glam::Vec2;

/// Custom cursor that trails the real pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    config: FollowerConfig,
    position: Vec2,
    visible: bool,
}

impl CursorFollower {
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            config,
            position: Vec2::ZERO,
            visible: false,
        }
    }

    /// Chases `pointer` by one frame and returns the translation to apply,
    /// recentered on the follower's own box. Runs whether visible or not.
    pub fn step(&mut self, pointer: Vec2) -> Vec2 {
        self.position = lerp_vec2(self.position, pointer, self.config.rate);
        self.position - self.config.recenter
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}
