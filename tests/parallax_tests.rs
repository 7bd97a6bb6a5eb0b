// Host-side tests for scroll and hero parallax.

use fx_core::parallax::{layer_offset, parse_speed};
use fx_core::{HeroConfig, HeroParallax, Rect, ScrollCoalescer, Vec2, Viewport};

#[test]
fn speed_attribute_coercion() {
    assert_eq!(parse_speed(None), 0.0);
    assert_eq!(parse_speed(Some("")), 0.0);
    assert_eq!(parse_speed(Some("fast")), 0.0);
    assert_eq!(parse_speed(Some("NaN")), 0.0);
    assert_eq!(parse_speed(Some("0.3")), 0.3);
    assert_eq!(parse_speed(Some(" -0.25 ")), -0.25);
}

#[test]
fn layer_moves_against_its_distance_from_center() {
    let vp = Viewport::new(1200.0, 800.0);
    // Center at y = 600, 200 below the viewport center.
    let below = Rect::new(0.0, 500.0, 100.0, 200.0);
    assert_eq!(layer_offset(below, vp, 0.5), -100.0);

    // Center at y = 100, 300 above.
    let above = Rect::new(0.0, 50.0, 100.0, 100.0);
    assert!((layer_offset(above, vp, 0.2) - 60.0).abs() < 1e-4);
}

#[test]
fn zero_speed_layer_stays_put() {
    let vp = Viewport::new(1200.0, 800.0);
    let r = Rect::new(0.0, -3000.0, 100.0, 100.0);
    assert_eq!(layer_offset(r, vp, 0.0), 0.0);
}

#[test]
fn centered_layer_has_no_offset() {
    let vp = Viewport::new(1200.0, 800.0);
    let r = Rect::new(0.0, 300.0, 100.0, 200.0);
    assert_eq!(layer_offset(r, vp, 3.0), 0.0);
}

#[test]
fn burst_of_scrolls_yields_one_recompute() {
    let mut c = ScrollCoalescer::new();
    let scheduled = (0..25).filter(|_| c.request()).count();
    assert_eq!(scheduled, 1);
    assert!(c.is_pending());

    c.complete();
    assert!(!c.is_pending());
    let scheduled = (0..3).filter(|_| c.request()).count();
    assert_eq!(scheduled, 1);
}

#[test]
fn blob_intensity_grows_with_index() {
    let hero = HeroParallax::new(HeroConfig::default());
    let d = Vec2::new(1.0, -0.5);

    let (o0, s0) = hero.blob(0, d);
    assert_eq!(o0, Vec2::new(12.0, -6.0));
    assert_eq!(s0, 1.0);

    let (o2, s2) = hero.blob(2, d);
    assert_eq!(o2, Vec2::new(24.0, -12.0));
    assert!((s2 - 1.04).abs() < 1e-6);
}

#[test]
fn character_uses_its_own_intensity() {
    let hero = HeroParallax::new(HeroConfig::default());
    assert_eq!(hero.character(Vec2::new(1.0, 1.0)), Vec2::new(18.0, 10.0));
    assert_eq!(hero.character(Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn pointer_offset_is_normalized_to_half_viewport() {
    let vp = Viewport::new(1000.0, 600.0);
    let d = vp.normalized_offset(Vec2::new(750.0, 0.0));
    assert_eq!(d, Vec2::new(0.5, -1.0));
}
