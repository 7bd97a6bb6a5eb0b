// Host-side tests for the pointer trail.

use fx_core::{Trail, TrailConfig, Vec2};

fn active_trail() -> Trail {
    let mut t = Trail::new(TrailConfig::default());
    t.set_active(true);
    t
}

#[test]
fn inactive_trail_does_not_move() {
    let mut t = Trail::new(TrailConfig::default());
    assert!(!t.is_active());
    assert!(!t.step(Vec2::new(300.0, 200.0)));
    assert!(t.points().iter().all(|p| *p == Vec2::ZERO));
}

#[test]
fn head_tracks_pointer_and_tail_cascades() {
    let mut t = active_trail();
    assert!(t.step(Vec2::new(100.0, 0.0)));
    let p = t.points();
    assert_eq!(p[0], Vec2::new(100.0, 0.0));
    // Each slot lerps toward the already-updated slot ahead of it.
    assert!((p[1].x - 20.0).abs() < 1e-4);
    assert!((p[2].x - 4.0).abs() < 1e-4);
    assert!((p[3].x - 0.8).abs() < 1e-4);
}

#[test]
fn motionless_pointer_pulls_every_slot_in() {
    let mut t = active_trail();
    let pointer = Vec2::new(420.0, -75.0);
    for _ in 0..2000 {
        t.step(pointer);
    }
    for (i, p) in t.points().iter().enumerate() {
        assert!((*p - pointer).length() < 1e-2, "slot {i} at {p:?}");
    }
}

#[test]
fn later_slots_lag_behind() {
    let mut t = active_trail();
    let pointer = Vec2::new(500.0, 0.0);
    for _ in 0..5 {
        t.step(pointer);
    }
    let xs: Vec<f32> = t.points().iter().map(|p| p.x).collect();
    for w in xs.windows(2) {
        assert!(w[0] >= w[1]);
    }
}

#[test]
fn length_is_fixed() {
    let mut t = active_trail();
    assert_eq!(t.len(), 30);
    for i in 0..50 {
        t.set_active(i % 3 != 0);
        t.step(Vec2::new(i as f32, 0.0));
        assert_eq!(t.len(), 30);
    }
}

#[test]
fn leaving_freezes_the_trail() {
    let mut t = active_trail();
    t.step(Vec2::new(10.0, 10.0));
    let before: Vec<Vec2> = t.points().to_vec();
    t.set_active(false);
    assert!(!t.step(Vec2::new(999.0, 999.0)));
    assert_eq!(t.points(), &before[..]);
}

#[test]
fn dot_size_shrinks_from_start_to_end() {
    let t = Trail::new(TrailConfig::default());
    assert!((t.dot_size(0) - 150.0).abs() < 1e-4);
    assert!((t.dot_size(29) - (3.0 + 147.0 / 30.0)).abs() < 1e-3);
    for i in 1..t.len() {
        assert!(t.dot_size(i) < t.dot_size(i - 1));
    }
}

#[test]
fn dot_opacity_fades_linearly() {
    let t = Trail::new(TrailConfig::default());
    assert_eq!(t.dot_opacity(0), 1.0);
    assert!((t.dot_opacity(15) - 0.5).abs() < 1e-6);
    assert!((t.dot_opacity(29) - 1.0 / 30.0).abs() < 1e-6);
}

#[test]
fn custom_trail_length() {
    let mut t = Trail::new(TrailConfig {
        count: 4,
        ..TrailConfig::default()
    });
    t.set_active(true);
    t.step(Vec2::ONE);
    assert_eq!(t.points().len(), 4);
    assert_eq!(t.dot_opacity(2), 0.5);
}
