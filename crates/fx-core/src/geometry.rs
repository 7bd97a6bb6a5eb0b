use glam::Vec2;

/// Linear interpolation, `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Replaces NaN and infinities with zero.
#[inline]
pub fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Client-space box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }
}

/// Size of the window's layout viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Pointer offset from the viewport center in units of half the viewport,
    /// so the edges map to -1 and 1. A zero-sized axis yields 0.
    pub fn normalized_offset(&self, point: Vec2) -> Vec2 {
        let c = self.center();
        Vec2::new(
            finite_or_zero((point.x - c.x) / c.x),
            finite_or_zero((point.y - c.y) / c.y),
        )
    }

    /// `offset / viewport size` per axis, zero on a degenerate axis.
    pub fn fraction(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            finite_or_zero(offset.x / self.width),
            finite_or_zero(offset.y / self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn normalized_offset_handles_empty_viewport() {
        let vp = Viewport::new(0.0, 0.0);
        assert_eq!(vp.normalized_offset(Vec2::new(10.0, -4.0)), Vec2::ZERO);
    }

    #[test]
    fn normalized_offset_edges() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.normalized_offset(Vec2::new(0.0, 600.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.normalized_offset(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }
}
