use crate::constants::{
    NAV_BUTTON_SELECTOR, NAV_PULSE_BORDER, NAV_PULSE_MS, NAV_PULSE_SHADOW, ROUTE_ATTRIBUTE,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intercept navigation buttons. Routing is not wired up yet, so a click only
/// records the route and plays the glow pulse.
pub fn wire_nav_buttons(document: &web::Document) {
    let Ok(buttons) = document.query_selector_all(NAV_BUTTON_SELECTOR) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let route = target.get_attribute(ROUTE_ATTRIBUTE).unwrap_or_default();
            log::debug!("[nav] route requested: {:?}", route);
            glow_pulse(&target);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn glow_pulse(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("box-shadow", NAV_PULSE_SHADOW);
    _ = style.set_property("border-color", NAV_PULSE_BORDER);
    let Some(window) = web::window() else {
        return;
    };
    let el = el.clone();
    dom::set_timeout(&window, NAV_PULSE_MS, move || {
        let style = el.style();
        _ = style.set_property("box-shadow", "");
        _ = style.set_property("border-color", "");
    });
}
