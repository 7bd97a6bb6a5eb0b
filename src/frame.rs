use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Reschedules itself after every step.
    Repeat,
    /// Runs only when a [`FrameTrigger`] asks for a frame.
    OnDemand,
}

struct LoopInner {
    label: &'static str,
    mode: Mode,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    step: RefCell<Box<dyn FnMut()>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("[frame:{}] requestAnimationFrame failed: {:?}", self.label, e),
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// A `requestAnimationFrame` callback with an owner.
///
/// While started, a repeating loop runs `step` every frame and an on-demand
/// loop runs it on the frame after each [`FrameTrigger::request_once`].
/// `stop` cancels the pending frame; dropping the loop does the same.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn repeating(label: &'static str, step: impl FnMut() + 'static) -> Self {
        Self::build(label, Mode::Repeat, step)
    }

    pub fn on_demand(label: &'static str, step: impl FnMut() + 'static) -> Self {
        Self::build(label, Mode::OnDemand, step)
    }

    fn build(label: &'static str, mode: Mode, step: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            label,
            mode,
            running: Cell::new(false),
            pending: Cell::new(None),
            step: RefCell::new(Box::new(step) as Box<dyn FnMut()>),
            tick: RefCell::new(None),
        });
        // Weak so the loop and its closure are freed together with the owner.
        let weak = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            {
                let mut step = inner.step.borrow_mut();
                (*step)();
            }
            if inner.mode == Mode::Repeat && inner.running.get() {
                inner.schedule();
            }
        }) as Box<dyn FnMut()>);
        *inner.tick.borrow_mut() = Some(tick);
        Self { inner }
    }

    /// Starts the loop and queues its first frame. No-op if already running.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.schedule();
        log::debug!("[frame:{}] started", self.inner.label);
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        self.inner.cancel();
        log::debug!("[frame:{}] stopped", self.inner.label);
    }

    /// Handle that can queue single frames without owning the loop.
    pub fn trigger(&self) -> FrameTrigger {
        FrameTrigger {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.running.set(false);
        self.inner.cancel();
    }
}

#[derive(Clone)]
pub struct FrameTrigger {
    inner: Weak<LoopInner>,
}

impl FrameTrigger {
    /// Runs the loop's step on the next animation frame, unless the loop is
    /// stopped or a frame is already queued.
    pub fn request_once(&self) {
        if let Some(inner) = self.inner.upgrade() {
            if inner.running.get() {
                inner.schedule();
            }
        }
    }
}
