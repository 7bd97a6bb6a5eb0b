// Host-side tests for the contact popover state machine.

use fx_core::{ClickTarget, Popover, PopoverState};

#[test]
fn starts_closed() {
    let p = Popover::new();
    assert_eq!(p.state(), PopoverState::Closed);
    assert!(!p.is_open());
}

#[test]
fn activator_opens() {
    let mut p = Popover::new();
    assert!(p.click(ClickTarget::Activator));
    assert_eq!(p.state(), PopoverState::Open);
}

#[test]
fn activator_on_open_popover_is_a_no_op() {
    let mut p = Popover::new();
    p.click(ClickTarget::Activator);
    assert!(!p.click(ClickTarget::Activator));
    assert!(p.is_open());
}

#[test]
fn backdrop_closes_open_popover() {
    let mut p = Popover::new();
    p.click(ClickTarget::Activator);
    assert!(p.click(ClickTarget::Backdrop));
    assert_eq!(p.state(), PopoverState::Closed);
}

#[test]
fn content_click_keeps_it_open() {
    let mut p = Popover::new();
    p.click(ClickTarget::Activator);
    assert!(!p.click(ClickTarget::Content));
    assert_eq!(p.state(), PopoverState::Open);
}

#[test]
fn clicks_on_closed_overlay_change_nothing() {
    let mut p = Popover::new();
    assert!(!p.click(ClickTarget::Backdrop));
    assert!(!p.click(ClickTarget::Content));
    assert_eq!(p.state(), PopoverState::Closed);
}

#[test]
fn reopens_after_dismissal() {
    let mut p = Popover::new();
    for _ in 0..3 {
        assert!(p.click(ClickTarget::Activator));
        assert!(p.click(ClickTarget::Backdrop));
    }
    assert!(!p.is_open());
}
