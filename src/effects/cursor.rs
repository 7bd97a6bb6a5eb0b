use super::Mounted;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use fx_core::{css, CursorFollower, FollowerConfig, Vec2};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Custom cursor that chases the pointer every frame and is only shown while
/// the pointer is over its section and the effect is running.
pub fn mount(
    cursor: web::HtmlElement,
    region: web::HtmlElement,
    pointer: Rc<Cell<Vec2>>,
    config: FollowerConfig,
) -> anyhow::Result<Mounted> {
    let follower = Rc::new(RefCell::new(CursorFollower::new(config)));
    let running = Rc::new(Cell::new(false));

    let frame = {
        let cursor = cursor.clone();
        let follower = follower.clone();
        FrameLoop::repeating("cursor", move || {
            let t = follower.borrow_mut().step(pointer.get());
            dom::set_transform(&cursor, &css::translate(t));
        })
    };

    let visibility = |visible: bool| {
        let cursor = cursor.clone();
        let follower = follower.clone();
        let running = running.clone();
        move |_: web::MouseEvent| {
            let mut f = follower.borrow_mut();
            f.set_visible(visible);
            if running.get() {
                dom::set_opacity(&cursor, f.opacity());
            }
        }
    };
    let enter = Listener::new(&region, "mouseenter", visibility(true))?;
    let leave = Listener::new(&region, "mouseleave", visibility(false))?;

    let show = {
        let cursor = cursor.clone();
        let running = running.clone();
        move || {
            running.set(true);
            let f = follower.borrow();
            if f.is_visible() {
                dom::set_opacity(&cursor, f.opacity());
            }
        }
    };
    let hide = {
        let cursor = cursor.clone();
        move || {
            running.set(false);
            dom::set_opacity(&cursor, 0.0);
        }
    };

    Ok(Mounted::new("cursor")
        .with_loop(frame)
        .with_listener(enter)
        .with_listener(leave)
        .on_start(show)
        .on_stop(hide)
        .on_teardown(move || {
            dom::clear_style(&cursor, "transform");
            dom::clear_style(&cursor, "opacity");
        }))
}
