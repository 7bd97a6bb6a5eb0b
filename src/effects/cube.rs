use super::Mounted;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::input::client_pos;
use fx_core::{css, CubeConfig, CubeRotation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Pointer-driven cube spin. Moves made while stopped are ignored, and a
/// restart forgets any leftover spin.
pub fn mount(document: &web::Document, cube: web::HtmlElement, config: CubeConfig) -> anyhow::Result<Mounted> {
    let rotation = Rc::new(RefCell::new(CubeRotation::new(config)));
    let active = Rc::new(Cell::new(false));

    let spin = {
        let rotation = rotation.clone();
        let gate = active.clone();
        Listener::new(document, "mousemove", move |ev: web::MouseEvent| {
            if gate.get() {
                rotation.borrow_mut().on_pointer_move(client_pos(&ev));
            }
        })?
    };

    let frame = {
        let cube = cube.clone();
        let rotation = rotation.clone();
        FrameLoop::repeating("cube", move || {
            let angle = rotation.borrow_mut().step();
            dom::set_transform(&cube, &css::cube_transform(angle));
        })
    };

    let on = active.clone();
    Ok(Mounted::new("cube")
        .with_loop(frame)
        .with_listener(spin)
        .on_start(move || {
            rotation.borrow_mut().reset_input();
            on.set(true);
        })
        .on_stop(move || active.set(false))
        .on_teardown(move || dom::clear_style(&cube, "transform")))
}
