use super::Mounted;
use crate::constants::*;
use crate::dom;
use fx_core::{css, WiggleConfig, WiggleSet};
use rand::Rng;
use std::rc::Rc;
use web_sys as web;

fn set_play_state(shapes: &[web::HtmlElement], state: &str) {
    for shape in shapes {
        dom::set_style(shape, "animation-play-state", state);
    }
}

/// Gives every shape its own random wiggle. Runs once; afterwards the CSS
/// animation does the work, and stop/start only pause and resume it.
pub fn mount<R: Rng + ?Sized>(document: &web::Document, rng: &mut R, config: WiggleConfig) -> anyhow::Result<Mounted> {
    let shapes = dom::query_all(document, SHAPE_SELECTOR)?;
    let set = WiggleSet::assign(rng, &config, shapes.len());

    for (shape, p) in shapes.iter().zip(set.iter()) {
        dom::set_style(shape, "animation", &css::wiggle_animation(WIGGLE_KEYFRAMES, p));
        dom::set_style(shape, WIGGLE_ROTATE_PROP, &css::deg(p.rotate_deg));
        dom::set_style(shape, WIGGLE_TRANSLATE_X_PROP, &css::px(p.translate_x));
        dom::set_style(shape, WIGGLE_TRANSLATE_Y_PROP, &css::px(p.translate_y));
    }
    log::debug!("[wiggle] {} shapes", set.len());

    let shapes = Rc::new(shapes);
    let resume = shapes.clone();
    let pause = shapes.clone();
    Ok(Mounted::new("wiggle")
        .on_start(move || set_play_state(&resume, "running"))
        .on_stop(move || set_play_state(&pause, "paused"))
        .on_teardown(move || {
            for shape in shapes.iter() {
                for property in [
                    "animation",
                    "animation-play-state",
                    WIGGLE_ROTATE_PROP,
                    WIGGLE_TRANSLATE_X_PROP,
                    WIGGLE_TRANSLATE_Y_PROP,
                ] {
                    dom::clear_style(shape, property);
                }
            }
        }))
}
