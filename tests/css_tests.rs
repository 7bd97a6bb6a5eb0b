// Host-side tests for the inline style strings handed to the DOM.

use fx_core::{css, BaseTransform, TiltFrame, Vec2, WiggleParams};

#[test]
fn card_transform_rounds_angles() {
    let frame = TiltFrame {
        active: true,
        offset: Vec2::new(1.5, -2.0),
        rotate_x: 3.14159,
        rotate_y: 0.0,
    };
    assert_eq!(
        css::tilt_transform(&frame, None),
        "translate(1.5px, -2px) rotateX(3.14deg) rotateY(0.00deg)"
    );
}

#[test]
fn icon_transform_reapplies_base() {
    let frame = TiltFrame {
        active: false,
        offset: Vec2::ZERO,
        rotate_x: 1.0,
        rotate_y: 2.5,
    };
    let base = BaseTransform {
        left_pct: 10.0,
        top_pct: 20.0,
        rotate_deg: 15.0,
        scale: 1.5,
    };
    assert_eq!(
        css::tilt_transform(&frame, Some(&base)),
        "translate(0px, 0px) rotateX(1.00deg) rotateY(2.50deg) rotate(15deg) scale(1.5)"
    );
}

#[test]
fn parallax_transforms() {
    assert_eq!(css::translate3d_y(-100.0), "translate3d(0, -100px, 0)");
    assert_eq!(
        css::blob_transform(Vec2::new(12.0, -6.0), 1.0),
        "translate3d(12px, -6px, 0) scale(1)"
    );
}

#[test]
fn cube_and_units() {
    assert_eq!(
        css::cube_transform(Vec2::new(10.0, -5.5)),
        "rotateX(10deg) rotateY(-5.5deg)"
    );
    assert_eq!(css::px(150.0), "150px");
    assert_eq!(css::deg(-2.25), "-2.25deg");
    assert_eq!(css::percent(42.0), "42%");
    assert_eq!(css::opacity(0.5), "0.5");
}

#[test]
fn wiggle_animation_shorthand() {
    let p = WiggleParams {
        rotate_deg: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        duration_sec: 2.5,
    };
    assert_eq!(
        css::wiggle_animation("wiggle", &p),
        "wiggle 2.50s ease-in-out infinite alternate"
    );
}
