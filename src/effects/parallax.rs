use super::Mounted;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::input::client_pos;
use fx_core::parallax::{layer_offset, parse_speed};
use fx_core::{css, HeroConfig, HeroParallax, ScrollCoalescer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Layer {
    el: web::HtmlElement,
    speed: f32,
}

fn apply_layers(window: &web::Window, layers: &[Layer]) {
    let viewport = dom::viewport(window);
    for layer in layers {
        let y = layer_offset(dom::rect(&layer.el), viewport, layer.speed);
        dom::set_transform(&layer.el, &css::translate3d_y(y));
    }
}

/// Scroll-driven layer offsets, coalesced to one recompute per frame.
pub fn mount_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<Mounted> {
    let layers: Rc<Vec<Layer>> = Rc::new(
        dom::query_all(document, PARALLAX_SELECTOR)?
            .into_iter()
            .map(|el| {
                let speed = parse_speed(el.get_attribute(PARALLAX_SPEED_ATTR).as_deref());
                Layer { el, speed }
            })
            .collect(),
    );
    if layers.is_empty() {
        log::warn!("[parallax] no {} layers", PARALLAX_SELECTOR);
    }

    // Position layers before the first scroll.
    apply_layers(window, &layers);

    let coalescer = Rc::new(RefCell::new(ScrollCoalescer::new()));
    let frame = {
        let window = window.clone();
        let layers = layers.clone();
        let coalescer = coalescer.clone();
        FrameLoop::on_demand("parallax", move || {
            apply_layers(&window, &layers);
            coalescer.borrow_mut().complete();
        })
    };

    let trigger = frame.trigger();
    let on_scroll = {
        let coalescer = coalescer.clone();
        Listener::passive(window, "scroll", move |_: web::Event| {
            if coalescer.borrow_mut().request() {
                trigger.request_once();
            }
        })?
    };

    // A frame cancelled by stop never completes, so resume clears the flag.
    let resume_trigger = frame.trigger();
    log::debug!("[parallax] {} layers", layers.len());
    Ok(Mounted::new("parallax")
        .with_loop(frame)
        .with_listener(on_scroll)
        .on_start(move || {
            coalescer.borrow_mut().complete();
            resume_trigger.request_once();
        })
        .on_teardown(move || {
            for layer in layers.iter() {
                dom::clear_style(&layer.el, "transform");
            }
        }))
}

/// Pointer drift of the hero's blobs and character. Returns `None` when the
/// page has no hero section.
pub fn mount_hero(
    window: &web::Window,
    document: &web::Document,
    config: HeroConfig,
) -> anyhow::Result<Option<Mounted>> {
    let Some(hero) = dom::optional_selector(document, HERO_SELECTOR) else {
        log::warn!("[parallax] no {} section, pointer parallax skipped", HERO_SELECTOR);
        return Ok(None);
    };
    let blobs = dom::query_all(document, HERO_BLOB_SELECTOR)?;
    let character = dom::optional_selector(document, HERO_CHARACTER_SELECTOR);
    let parallax = HeroParallax::new(config);

    let moved: Vec<web::HtmlElement> = blobs.iter().cloned().chain(character.clone()).collect();
    let window = window.clone();
    let active = Rc::new(Cell::new(false));
    let gate = active.clone();
    let listener = Listener::new(&hero, "mousemove", move |ev: web::MouseEvent| {
        if !gate.get() {
            return;
        }
        let d = dom::viewport(&window).normalized_offset(client_pos(&ev));
        for (i, blob) in blobs.iter().enumerate() {
            let (offset, scale) = parallax.blob(i, d);
            dom::set_transform(blob, &css::blob_transform(offset, scale));
        }
        if let Some(c) = &character {
            dom::set_transform(c, &css::translate3d(parallax.character(d)));
        }
    })?;

    let on = active.clone();
    Ok(Some(
        Mounted::new("hero")
            .with_listener(listener)
            .on_start(move || on.set(true))
            .on_stop(move || active.set(false))
            .on_teardown(move || {
                for el in &moved {
                    dom::clear_style(el, "transform");
                }
            }),
    ))
}
