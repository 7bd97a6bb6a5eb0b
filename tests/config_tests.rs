// Host-side tests for effect configuration and its validation.

use fx_core::{ConfigError, FxConfig, TrailConfig};

#[test]
fn defaults_validate() {
    assert_eq!(FxConfig::default().validate(), Ok(()));
}

#[test]
fn empty_trail_is_rejected() {
    let mut cfg = FxConfig::default();
    cfg.trail = TrailConfig {
        count: 0,
        ..cfg.trail
    };
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyTrail));
}

#[test]
fn rates_must_be_in_unit_interval() {
    let mut cfg = FxConfig::default();
    cfg.tilt.smoothing = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::RateOutOfRange { field: "tilt.smoothing", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.cube.decay = 1.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::RateOutOfRange { field: "cube.decay", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.follower.rate = 1.0;
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn inverted_ranges_are_rejected() {
    let mut cfg = FxConfig::default();
    cfg.wiggle.duration_min_sec = 6.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvertedRange {
            field: "wiggle.duration",
            min: 6.0,
            max: 5.0,
        })
    );

    let mut cfg = FxConfig::default();
    cfg.trail.size_end = 200.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::InvertedRange { .. })));
}

#[test]
fn non_positive_values_are_rejected() {
    let mut cfg = FxConfig::default();
    cfg.tilt.activation_radius = -1.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { .. })));

    let mut cfg = FxConfig::default();
    cfg.tilt.force.falloff = f32::NAN;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { .. })));
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(ConfigError::EmptyTrail.to_string(), "trail needs at least one dot");
    let e = ConfigError::RateOutOfRange {
        field: "cube.blend",
        value: 2.0,
    };
    assert_eq!(e.to_string(), "cube.blend must be in (0, 1], got 2");
}

#[test]
fn non_finite_amplitudes_are_rejected() {
    let mut cfg = FxConfig::default();
    cfg.tilt.tilt_intensity = f32::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite { field: "tilt.tilt_intensity", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.hero.character_intensity.y = f32::INFINITY;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite { field: "hero.character_intensity.y", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.wiggle.max_translate_px = f32::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite { field: "wiggle.max_translate_px", .. })
    ));

    // Zero and negative amplitudes are allowed; they only flip or mute a motion.
    let mut cfg = FxConfig::default();
    cfg.hero.blob_scale_step = 0.0;
    cfg.tilt.tilt_intensity = -10.0;
    assert_eq!(cfg.validate(), Ok(()));
}
