//! One-time random parameters for the idle wiggle keyframes.
//!
//! The oscillation itself is a CSS animation; this module only draws the
//! per-shape amplitudes and duration. Randomness is passed in so a seeded
//! generator reproduces the same assignment.

use crate::config::WiggleConfig;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiggleParams {
    pub rotate_deg: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub duration_sec: f32,
}

/// Rounds to the two decimals the stylesheet receives.
#[inline]
fn hundredths(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    hundredths(rng.gen::<f32>() * max * 2.0 - max)
}

impl WiggleParams {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, config: &WiggleConfig) -> Self {
        let rotate_deg = symmetric(rng, config.max_rotation_deg);
        let translate_x = symmetric(rng, config.max_translate_px);
        let translate_y = symmetric(rng, config.max_translate_px);
        let span = config.duration_max_sec - config.duration_min_sec;
        let duration_sec = hundredths(rng.gen::<f32>() * span + config.duration_min_sec);
        Self {
            rotate_deg,
            translate_x,
            translate_y,
            duration_sec,
        }
    }
}

/// Parameters for every shape on the page, fixed after construction.
#[derive(Clone, Debug, Default)]
pub struct WiggleSet {
    params: Vec<WiggleParams>,
}

impl WiggleSet {
    pub fn assign<R: Rng + ?Sized>(rng: &mut R, config: &WiggleConfig, count: usize) -> Self {
        let params = (0..count)
            .map(|_| WiggleParams::draw(rng, config))
            .collect::<Vec<_>>();
        log::debug!("[wiggle] assigned {} shapes", params.len());
        Self { params }
    }

    pub fn get(&self, index: usize) -> Option<&WiggleParams> {
        self.params.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WiggleParams> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
