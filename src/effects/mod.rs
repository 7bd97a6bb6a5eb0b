pub mod cube;
pub mod cursor;
pub mod glow;
pub mod parallax;
pub mod popover;
pub mod wiggle;

use crate::constants::{GLOW_ZONE_SELECTOR, REQUIRED_IDS};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use web_sys as web;

/// Elements the page cannot do without. Looked up before any effect touches
/// the page, so a missing one leaves the markup untouched.
pub struct Required {
    pub glow_zone: web::HtmlElement,
    pub cursor: web::HtmlElement,
    pub cursor_region: web::HtmlElement,
    pub contact_activator: web::HtmlElement,
    pub contact_overlay: web::HtmlElement,
    pub cube: web::HtmlElement,
}

impl Required {
    pub fn resolve(document: &web::Document) -> anyhow::Result<Self> {
        let [cursor, cursor_region, contact_activator, contact_overlay, cube] = REQUIRED_IDS;
        Ok(Self {
            glow_zone: dom::require_selector(document, GLOW_ZONE_SELECTOR)?,
            cursor: dom::require_by_id(document, cursor)?,
            cursor_region: dom::require_by_id(document, cursor_region)?,
            contact_activator: dom::require_by_id(document, contact_activator)?,
            contact_overlay: dom::require_by_id(document, contact_overlay)?,
            cube: dom::require_by_id(document, cube)?,
        })
    }
}

/// Everything one effect keeps alive: its frame loops, its listeners and
/// optional start/stop hooks for work done outside a loop.
pub struct Mounted {
    pub name: &'static str,
    loops: Vec<FrameLoop>,
    listeners: Vec<Listener>,
    on_start: Option<Box<dyn Fn()>>,
    on_stop: Option<Box<dyn Fn()>>,
    on_teardown: Option<Box<dyn FnOnce()>>,
}

impl Mounted {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            loops: Vec::new(),
            listeners: Vec::new(),
            on_start: None,
            on_stop: None,
            on_teardown: None,
        }
    }

    pub fn with_loop(mut self, frame: FrameLoop) -> Self {
        self.loops.push(frame);
        self
    }

    pub fn with_listener(mut self, listener: Listener) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn on_start(mut self, f: impl Fn() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_stop(mut self, f: impl Fn() + 'static) -> Self {
        self.on_stop = Some(Box::new(f));
        self
    }

    /// Runs when the effect is dropped, after its listeners are detached.
    pub fn on_teardown(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_teardown = Some(Box::new(f));
        self
    }

    pub fn start(&self) {
        for l in &self.loops {
            l.start();
        }
        if let Some(f) = &self.on_start {
            f();
        }
    }

    pub fn stop(&self) {
        for l in &self.loops {
            l.stop();
        }
        if let Some(f) = &self.on_stop {
            f();
        }
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.loops.clear();
        self.listeners.clear();
        if let Some(f) = self.on_teardown.take() {
            f();
        }
        log::debug!("[fx] {} torn down", self.name);
    }
}
