use super::Mounted;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use anyhow::anyhow;
use fx_core::{css, BaseTransform, ProximityTilt, TiltConfig, Trail, TrailConfig, Vec2};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements driven by one `ProximityTilt`, with an optional fixed base
/// transform per element.
struct TiltGroup {
    elements: Vec<web::HtmlElement>,
    bases: Vec<Option<BaseTransform>>,
    tilt: ProximityTilt,
}

impl TiltGroup {
    fn new(elements: Vec<web::HtmlElement>, bases: Vec<Option<BaseTransform>>, config: TiltConfig) -> Self {
        let tilt = ProximityTilt::new(config, elements.len());
        Self {
            elements,
            bases,
            tilt,
        }
    }

    fn frame(&mut self, window: &web::Window, pointer: Vec2) {
        let viewport = dom::viewport(window);
        for (i, el) in self.elements.iter().enumerate() {
            let frame = self.tilt.step(i, dom::rect(el), pointer, viewport);
            dom::set_class(el, GLOW_ACTIVE_CLASS, frame.active);
            let base = self.bases.get(i).and_then(Option::as_ref);
            dom::set_transform(el, &css::tilt_transform(&frame, base));
        }
    }
}

fn read_base(el: &web::HtmlElement) -> BaseTransform {
    BaseTransform::from_attrs(
        el.get_attribute(ICON_POSX_ATTR).as_deref(),
        el.get_attribute(ICON_POSY_ATTR).as_deref(),
        el.get_attribute(ICON_ROTATE_ATTR).as_deref(),
        el.get_attribute(ICON_SCALE_ATTR).as_deref(),
    )
}

fn place_icon(el: &web::HtmlElement, base: &BaseTransform) {
    dom::set_style(el, "left", &css::percent(base.left_pct));
    dom::set_style(el, "top", &css::percent(base.top_pct));
    dom::set_transform(el, &css::base_transform(base));
    dom::set_opacity(el, 1.0);
}

fn create_dots(document: &web::Document, zone: &web::HtmlElement, count: usize) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut dots = Vec::with_capacity(count);
    for _ in 0..count {
        let dot: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow!("create trail dot: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("trail dot is not an HtmlElement: {:?}", e))?;
        _ = dot.class_list().add_1(TRAIL_DOT_CLASS);
        zone.append_child(&dot)
            .map_err(|e| anyhow!("append trail dot: {:?}", e))?;
        dots.push(dot);
    }
    Ok(dots)
}

fn set_all_opacity(dots: &[web::HtmlElement], value: f32) {
    for dot in dots {
        dom::set_opacity(dot, value);
    }
}

/// Glow cards and the pointer trail, sharing one frame loop over the glow
/// zone. The dots only show while the pointer is inside the zone and the
/// effect is running.
pub fn mount_cards(
    window: &web::Window,
    document: &web::Document,
    zone: web::HtmlElement,
    pointer: Rc<Cell<Vec2>>,
    tilt: TiltConfig,
    trail: TrailConfig,
) -> anyhow::Result<Mounted> {
    let cards = dom::query_all(document, GLOW_CARD_SELECTOR)?;
    let card_count = cards.len();
    let mut group = TiltGroup::new(cards.clone(), vec![None; card_count], tilt);

    let dots = Rc::new(create_dots(document, &zone, trail.count)?);
    let state = Rc::new(RefCell::new(Trail::new(trail)));
    let running = Rc::new(Cell::new(false));

    let frame = {
        let window = window.clone();
        let dots = dots.clone();
        let state = state.clone();
        FrameLoop::repeating("glow-cards", move || {
            let p = pointer.get();
            group.frame(&window, p);

            let mut trail = state.borrow_mut();
            if trail.step(p) {
                for (i, (dot, pos)) in dots.iter().zip(trail.points()).enumerate() {
                    dom::set_style(dot, TRAIL_SIZE_PROP, &css::px(trail.dot_size(i)));
                    dom::set_transform(dot, &css::translate(*pos));
                    dom::set_opacity(dot, trail.dot_opacity(i));
                }
            }
        })
    };

    let presence = |inside: bool| {
        let dots = dots.clone();
        let state = state.clone();
        let running = running.clone();
        move |_: web::MouseEvent| {
            state.borrow_mut().set_active(inside);
            if running.get() {
                set_all_opacity(&dots, if inside { 1.0 } else { 0.0 });
            }
        }
    };
    let enter = Listener::new(&zone, "mouseenter", presence(true))?;
    let leave = Listener::new(&zone, "mouseleave", presence(false))?;

    let show = {
        let dots = dots.clone();
        let running = running.clone();
        move || {
            running.set(true);
            if state.borrow().is_active() {
                set_all_opacity(&dots, 1.0);
            }
        }
    };
    let hide = {
        let dots = dots.clone();
        move || {
            running.set(false);
            set_all_opacity(&dots, 0.0);
        }
    };

    log::debug!("[glow] {} cards, {} trail dots", card_count, dots.len());
    Ok(Mounted::new("glow-cards")
        .with_loop(frame)
        .with_listener(enter)
        .with_listener(leave)
        .on_start(show)
        .on_stop(hide)
        .on_teardown(move || {
            for dot in dots.iter() {
                dot.remove();
            }
            for card in &cards {
                dom::set_class(card, GLOW_ACTIVE_CLASS, false);
                dom::clear_style(card, "transform");
            }
        }))
}

/// Icons in the glow zone: placed once from their data attributes, then
/// tilted like the cards with their base rotation and scale re-applied.
pub fn mount_icons(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<Cell<Vec2>>,
    tilt: TiltConfig,
) -> anyhow::Result<Mounted> {
    let icons = dom::query_all(document, GLOW_ICON_SELECTOR)?;
    let bases: Vec<Option<BaseTransform>> = icons
        .iter()
        .map(|el| {
            let base = read_base(el);
            place_icon(el, &base);
            Some(base)
        })
        .collect();
    let count = icons.len();
    let mut group = TiltGroup::new(icons.clone(), bases, tilt);

    let window = window.clone();
    let frame = FrameLoop::repeating("glow-icons", move || {
        group.frame(&window, pointer.get());
    });

    log::debug!("[glow] {} icons", count);
    Ok(Mounted::new("glow-icons").with_loop(frame).on_teardown(move || {
        for icon in &icons {
            dom::set_class(icon, GLOW_ACTIVE_CLASS, false);
            for property in ["left", "top", "transform", "opacity"] {
                dom::clear_style(icon, property);
            }
        }
    }))
}
