use crate::dom::Listener;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Last known pointer position in client coordinates, shared read-only with
/// the effects that sample it once per frame.
pub struct PointerTracker {
    position: Rc<Cell<Vec2>>,
    _listener: Listener,
}

impl PointerTracker {
    pub fn install(document: &web::Document) -> anyhow::Result<Self> {
        let position = Rc::new(Cell::new(Vec2::ZERO));
        let pos = position.clone();
        let listener = Listener::new(document, "mousemove", move |ev: web::MouseEvent| {
            pos.set(client_pos(&ev));
        })?;
        Ok(Self {
            position,
            _listener: listener,
        })
    }

    pub fn handle(&self) -> Rc<Cell<Vec2>> {
        self.position.clone()
    }
}
