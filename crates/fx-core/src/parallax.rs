//! Scroll and hero-pointer parallax.

use crate::config::HeroConfig;
use crate::geometry::{finite_or_zero, Rect, Viewport};
use crate::tilt::parse_number;
use glam::Vec2;

/// Layer speed from its `data-speed` attribute. Missing or non-numeric -> 0.
pub fn parse_speed(raw: Option<&str>) -> f32 {
    parse_number(raw).unwrap_or(0.0)
}

/// Vertical translation for a layer: its center's distance from the
/// viewport's vertical center, scaled by `speed` and negated.
pub fn layer_offset(rect: Rect, viewport: Viewport, speed: f32) -> f32 {
    let from_center = rect.center().y - viewport.height * 0.5;
    finite_or_zero(-from_center * speed)
}

/// Collapses bursts of scroll events into one recompute per animation frame.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    pending: bool,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should schedule a recompute, i.e. when
    /// none is pending yet.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called by the recompute once it has run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Pointer-driven drift of the hero decorations.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeroParallax {
    config: HeroConfig,
}

impl HeroParallax {
    pub fn new(config: HeroConfig) -> Self {
        Self { config }
    }

    /// Translation and scale of blob `index` for a normalized pointer offset.
    pub fn blob(&self, index: usize, normalized: Vec2) -> (Vec2, f32) {
        let i = index as f32;
        let intensity = self.config.blob_base_intensity + i * self.config.blob_intensity_step;
        (normalized * intensity, 1.0 + i * self.config.blob_scale_step)
    }

    pub fn character(&self, normalized: Vec2) -> Vec2 {
        normalized * self.config.character_intensity
    }
}
