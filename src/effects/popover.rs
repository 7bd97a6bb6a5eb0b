use super::Mounted;
use crate::constants::POPOVER_OPEN_CLASS;
use crate::dom::{self, Listener};
use fx_core::{ClickTarget, Popover};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn click_target(ev: &web::MouseEvent, overlay: &web::HtmlElement) -> ClickTarget {
    let on_backdrop = ev
        .target()
        .map(|t| js_sys::Object::is(&t, overlay))
        .unwrap_or(false);
    if on_backdrop {
        ClickTarget::Backdrop
    } else {
        ClickTarget::Content
    }
}

/// Contact card: the activator opens it, a click on the bare overlay closes it.
pub fn mount(activator: web::HtmlElement, overlay: web::HtmlElement) -> anyhow::Result<Mounted> {
    let popover = Rc::new(RefCell::new(Popover::new()));

    let apply = {
        let overlay = overlay.clone();
        let popover = popover.clone();
        move |target: ClickTarget| {
            let mut p = popover.borrow_mut();
            if p.click(target) {
                log::debug!("[popover] {:?} -> {:?}", target, p.state());
                dom::set_class(&overlay, POPOVER_OPEN_CLASS, p.is_open());
            }
        }
    };

    let open = {
        let apply = apply.clone();
        Listener::new(&activator, "click", move |_: web::MouseEvent| {
            apply(ClickTarget::Activator);
        })?
    };
    let dismiss = {
        let target_of = overlay.clone();
        Listener::new(&overlay, "click", move |ev: web::MouseEvent| {
            apply(click_target(&ev, &target_of));
        })?
    };

    Ok(Mounted::new("popover")
        .with_listener(open)
        .with_listener(dismiss)
        .on_teardown(move || dom::set_class(&overlay, POPOVER_OPEN_CLASS, false)))
}
