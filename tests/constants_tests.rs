// Host-side tests for constants and DOM hooks.
// The front-end crate is wasm-only, so its selector module is included directly.

#![allow(dead_code)]
mod dom_hooks {
    include!("../src/constants.rs");
}

use dom_hooks::*;
use fx_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_sane() {
    assert!(GLOW_RADIUS > 0.0);
    assert!(GLOW_RADIUS < FORCE_PEAK * FORCE_FALLOFF);
    assert!(TRAIL_COUNT > 0 && TRAIL_COUNT <= TRAIL_INLINE);
    assert!(TRAIL_SIZE_START > TRAIL_SIZE_END);
    assert!(WIGGLE_DURATION_MAX_SEC > WIGGLE_DURATION_MIN_SEC);
    for rate in [TILT_SMOOTHING, TRAIL_SMOOTHING, FOLLOWER_RATE, CUBE_BLEND, CUBE_DECAY] {
        assert!(rate > 0.0 && rate < 1.0);
    }
}

#[test]
fn ids_are_bare() {
    for id in [CURSOR_ID, CURSOR_REGION_ID, CONTACT_ACTIVATOR_ID, CONTACT_OVERLAY_ID, CUBE_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
    }
}

#[test]
fn custom_properties_are_dashed() {
    for prop in [
        TRAIL_SIZE_PROP,
        WIGGLE_ROTATE_PROP,
        WIGGLE_TRANSLATE_X_PROP,
        WIGGLE_TRANSLATE_Y_PROP,
    ] {
        assert!(prop.starts_with("--"), "{prop}");
    }
}

#[test]
fn glow_selectors_are_scoped_to_the_zone() {
    assert!(GLOW_CARD_SELECTOR.starts_with(GLOW_ZONE_SELECTOR));
    assert!(GLOW_ICON_SELECTOR.starts_with(GLOW_ZONE_SELECTOR));
}

#[test]
fn required_ids_cover_every_fatal_hook() {
    assert_eq!(
        REQUIRED_IDS,
        [CURSOR_ID, CURSOR_REGION_ID, CONTACT_ACTIVATOR_ID, CONTACT_OVERLAY_ID, CUBE_ID]
    );
    for (i, a) in REQUIRED_IDS.iter().enumerate() {
        for b in &REQUIRED_IDS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
