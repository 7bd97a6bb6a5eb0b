//! Pointer-proximity tilt shared by the glow cards and the icon field.
//!
//! Each tracked element owns an offset that is pushed away from (or pulled
//! toward) the pointer by a force that fades out linearly with distance. The
//! offset chases its target with a fixed per-frame lerp, and the element is
//! tilted by how far the pointer sits from its center relative to the
//! viewport.

use crate::config::TiltConfig;
use crate::geometry::{finite_or_zero, lerp_vec2, Rect, Viewport};
use glam::Vec2;

/// Result of one element's frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltFrame {
    pub active: bool,
    pub offset: Vec2,
    /// Degrees around the X axis (vertical pointer offset).
    pub rotate_x: f32,
    /// Degrees around the Y axis (horizontal pointer offset).
    pub rotate_y: f32,
}

/// Fixed placement of an icon, read once from its data attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseTransform {
    pub left_pct: f32,
    pub top_pct: f32,
    pub rotate_deg: f32,
    pub scale: f32,
}

impl Default for BaseTransform {
    fn default() -> Self {
        Self {
            left_pct: 0.0,
            top_pct: 0.0,
            rotate_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl BaseTransform {
    /// Builds a base transform from raw attribute values. Missing or
    /// non-numeric values fall back to the defaults.
    pub fn from_attrs(
        posx: Option<&str>,
        posy: Option<&str>,
        rotate: Option<&str>,
        scale: Option<&str>,
    ) -> Self {
        let d = Self::default();
        Self {
            left_pct: parse_number(posx).unwrap_or(d.left_pct),
            top_pct: parse_number(posy).unwrap_or(d.top_pct),
            rotate_deg: parse_number(rotate).unwrap_or(d.rotate_deg),
            scale: parse_number(scale).unwrap_or(d.scale),
        }
    }
}

/// Lenient attribute coercion: trims whitespace, rejects non-finite values.
pub fn parse_number(raw: Option<&str>) -> Option<f32> {
    raw?.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Offset the force pushes an element toward, given the pointer offset from
/// its center. A pointer exactly on the center produces no force.
pub fn force_target(config: &TiltConfig, diff: Vec2) -> Vec2 {
    let distance = diff.length();
    if distance == 0.0 {
        return Vec2::ZERO;
    }
    let force = config.force.magnitude(distance);
    let target = diff / distance * force;
    Vec2::new(finite_or_zero(target.x), finite_or_zero(target.y))
}

pub struct ProximityTilt {
    config: TiltConfig,
    offsets: Vec<Vec2>,
}

impl ProximityTilt {
    pub fn new(config: TiltConfig, count: usize) -> Self {
        Self {
            config,
            offsets: vec![Vec2::ZERO; count],
        }
    }

    pub fn offset(&self, index: usize) -> Option<Vec2> {
        self.offsets.get(index).copied()
    }

    /// Advances element `index` by one frame. Out-of-range indices return an
    /// idle frame.
    pub fn step(&mut self, index: usize, element: Rect, pointer: Vec2, viewport: Viewport) -> TiltFrame {
        let Some(offset) = self.offsets.get_mut(index) else {
            return TiltFrame::default();
        };
        let diff = pointer - element.center();
        let distance = diff.length();
        let target = force_target(&self.config, diff);
        *offset = lerp_vec2(*offset, target, self.config.smoothing);

        let tilt = viewport.fraction(diff) * self.config.tilt_intensity;
        TiltFrame {
            active: distance < self.config.activation_radius,
            offset: *offset,
            rotate_x: -tilt.y,
            rotate_y: tilt.x,
        }
    }
}
