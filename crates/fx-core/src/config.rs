//! Per-effect configuration.
//!
//! Every struct defaults to the values in [`crate::constants`]. The web front
//! end validates the whole [`FxConfig`] once before mounting anything.

use crate::constants::*;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be in (0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("trail needs at least one dot")]
    EmptyTrail,
    #[error("{field}: min {min} must be below max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// `max(0, peak - distance / falloff) * gain`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceCurve {
    pub peak: f32,
    pub falloff: f32,
    pub gain: f32,
}

impl Default for ForceCurve {
    fn default() -> Self {
        Self {
            peak: FORCE_PEAK,
            falloff: FORCE_FALLOFF,
            gain: FORCE_GAIN,
        }
    }
}

impl ForceCurve {
    #[inline]
    pub fn magnitude(&self, distance: f32) -> f32 {
        (self.peak - distance / self.falloff).max(0.0) * self.gain
    }

    /// Distance at and beyond which the force is zero.
    pub fn reach(&self) -> f32 {
        self.peak * self.falloff
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub activation_radius: f32,
    pub tilt_intensity: f32,
    pub smoothing: f32,
    pub force: ForceCurve,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            activation_radius: GLOW_RADIUS,
            tilt_intensity: TILT_INTENSITY,
            smoothing: TILT_SMOOTHING,
            force: ForceCurve::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub count: usize,
    pub smoothing: f32,
    pub size_start: f32,
    pub size_end: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            count: TRAIL_COUNT,
            smoothing: TRAIL_SMOOTHING,
            size_start: TRAIL_SIZE_START,
            size_end: TRAIL_SIZE_END,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroConfig {
    pub blob_base_intensity: f32,
    pub blob_intensity_step: f32,
    pub blob_scale_step: f32,
    pub character_intensity: Vec2,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            blob_base_intensity: BLOB_BASE_INTENSITY,
            blob_intensity_step: BLOB_INTENSITY_STEP,
            blob_scale_step: BLOB_SCALE_STEP,
            character_intensity: Vec2::from_array(CHARACTER_INTENSITY),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerConfig {
    pub rate: f32,
    pub recenter: Vec2,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            rate: FOLLOWER_RATE,
            recenter: Vec2::from_array(FOLLOWER_RECENTER),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiggleConfig {
    pub max_rotation_deg: f32,
    pub max_translate_px: f32,
    pub duration_min_sec: f32,
    pub duration_max_sec: f32,
}

impl Default for WiggleConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: WIGGLE_MAX_ROTATION_DEG,
            max_translate_px: WIGGLE_MAX_TRANSLATE_PX,
            duration_min_sec: WIGGLE_DURATION_MIN_SEC,
            duration_max_sec: WIGGLE_DURATION_MAX_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeConfig {
    pub speed_factor: f32,
    pub blend: f32,
    pub decay: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            speed_factor: CUBE_SPEED_FACTOR,
            blend: CUBE_BLEND,
            decay: CUBE_DECAY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FxConfig {
    pub tilt: TiltConfig,
    pub trail: TrailConfig,
    pub hero: HeroConfig,
    pub follower: FollowerConfig,
    pub wiggle: WiggleConfig,
    pub cube: CubeConfig,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn rate(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { field, value })
    }
}

fn range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

impl FxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tilt.activation_radius", self.tilt.activation_radius)?;
        rate("tilt.smoothing", self.tilt.smoothing)?;
        finite("tilt.tilt_intensity", self.tilt.tilt_intensity)?;
        finite("tilt.force.peak", self.tilt.force.peak)?;
        positive("tilt.force.falloff", self.tilt.force.falloff)?;
        finite("tilt.force.gain", self.tilt.force.gain)?;

        if self.trail.count == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        rate("trail.smoothing", self.trail.smoothing)?;
        positive("trail.size_end", self.trail.size_end)?;
        range("trail.size", self.trail.size_end, self.trail.size_start)?;

        finite("hero.blob_base_intensity", self.hero.blob_base_intensity)?;
        finite("hero.blob_intensity_step", self.hero.blob_intensity_step)?;
        finite("hero.blob_scale_step", self.hero.blob_scale_step)?;
        finite("hero.character_intensity.x", self.hero.character_intensity.x)?;
        finite("hero.character_intensity.y", self.hero.character_intensity.y)?;

        rate("follower.rate", self.follower.rate)?;
        finite("follower.recenter.x", self.follower.recenter.x)?;
        finite("follower.recenter.y", self.follower.recenter.y)?;

        finite("wiggle.max_rotation_deg", self.wiggle.max_rotation_deg)?;
        finite("wiggle.max_translate_px", self.wiggle.max_translate_px)?;

        positive("wiggle.duration_min_sec", self.wiggle.duration_min_sec)?;
        range(
            "wiggle.duration",
            self.wiggle.duration_min_sec,
            self.wiggle.duration_max_sec,
        )?;

        positive("cube.speed_factor", self.cube.speed_factor)?;
        rate("cube.blend", self.cube.blend)?;
        rate("cube.decay", self.cube.decay)?;
        Ok(())
    }
}
