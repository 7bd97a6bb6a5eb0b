use anyhow::anyhow;
use fx_core::{Rect, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolves once the document has been parsed. Returns immediately when the
/// module is loaded after `DOMContentLoaded`.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
pub fn rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn require_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

pub fn optional_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn require_selector(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    optional_selector(document, selector).ok_or_else(|| anyhow!("missing {}", selector))
}

/// All matching elements, in document order. Non-HTML matches are skipped.
pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    set_style(el, "transform", value);
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, value: f32) {
    set_style(el, "opacity", &fx_core::css::opacity(value));
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// An event listener that stays attached for as long as this value lives.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        Self::attach(target, event, handler, false)
    }

    /// Same as [`Listener::new`] but registered with `{ passive: true }`.
    pub fn passive<E>(target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        Self::attach(target, event, handler, true)
    }

    fn attach<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
        passive: bool,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
