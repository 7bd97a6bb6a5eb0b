#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use effects::{Mounted, Required};
use fx_core::FxConfig;
use input::PointerTracker;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod frame;
mod input;

/// Every mounted effect plus the shared pointer tracker. Dropping it detaches
/// all listeners, cancels all frames and removes the trail dots.
struct PageEffects {
    effects: Vec<Mounted>,
    _pointer: PointerTracker,
}

impl PageEffects {
    fn start(&self) {
        for e in &self.effects {
            e.start();
        }
    }

    fn stop(&self) {
        for e in &self.effects {
            e.stop();
        }
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<PageEffects>> = const { RefCell::new(None) };
}

fn mount_all(window: &web::Window, document: &web::Document, config: &FxConfig) -> anyhow::Result<PageEffects> {
    config.validate().map_err(|e| anyhow!("invalid config: {}", e))?;
    let required = Required::resolve(document)?;
    let pointer = PointerTracker::install(document)?;

    let mut mounted = vec![effects::parallax::mount_scroll(window, document)?];
    if let Some(hero) = effects::parallax::mount_hero(window, document, config.hero)? {
        mounted.push(hero);
    }
    mounted.push(effects::glow::mount_cards(
        window,
        document,
        required.glow_zone,
        pointer.handle(),
        config.tilt,
        config.trail,
    )?);
    mounted.push(effects::glow::mount_icons(window, document, pointer.handle(), config.tilt)?);
    mounted.push(effects::cursor::mount(
        required.cursor,
        required.cursor_region,
        pointer.handle(),
        config.follower,
    )?);
    mounted.push(effects::wiggle::mount(document, &mut StdRng::from_entropy(), config.wiggle)?);
    mounted.push(effects::popover::mount(required.contact_activator, required.contact_overlay)?);
    mounted.push(effects::cube::mount(document, required.cube, config.cube)?);

    Ok(PageEffects {
        effects: mounted,
        _pointer: pointer,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    dom::document_ready(&document).await?;

    let t0 = Instant::now();
    let page = mount_all(&window, &document, &FxConfig::default())?;
    page.start();
    let loops: usize = page.effects.iter().map(Mounted::loop_count).sum();
    log::info!(
        "mounted {} effects ({} frame loops) in {:.1}ms",
        page.effects.len(),
        loops,
        t0.elapsed().as_secs_f64() * 1000.0
    );

    MOUNTED.with(|m| *m.borrow_mut() = Some(page));
    Ok(())
}

/// Stops every frame loop and pauses the wiggle animations.
#[wasm_bindgen]
pub fn pause_effects() {
    MOUNTED.with(|m| {
        if let Some(page) = m.borrow().as_ref() {
            page.stop();
            log::info!("effects paused");
        }
    });
}

#[wasm_bindgen]
pub fn resume_effects() {
    MOUNTED.with(|m| {
        if let Some(page) = m.borrow().as_ref() {
            page.start();
            log::info!("effects resumed");
        }
    });
}

/// Detaches everything. Effects cannot be resumed afterwards.
#[wasm_bindgen]
pub fn teardown_effects() {
    let page = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(page) = page {
        page.stop();
        drop(page);
        log::info!("effects torn down");
    }
}
