use crate::dom;
use backdrop_core::{normalized_in_rect, InputTargets};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    /// Surface the pointer position is normalized against.
    pub surface: web::Element,
    /// Title stage; absent on pages without the hero title.
    pub stage: Option<web::HtmlElement>,
    pub targets: Rc<RefCell<InputTargets>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_stage_hover(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_passive_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let pointer = normalized_in_rect(x, y, dom::client_rect(&w.surface));
        let title = w
            .stage
            .as_ref()
            .map(|stage| normalized_in_rect(x, y, dom::client_rect(stage)));

        let mut t = w.targets.borrow_mut();
        t.pointer = pointer;
        if let Some(title) = title {
            t.title = title;
        }
    });
}

fn wire_stage_hover(w: &PointerWiring) {
    let Some(stage) = w.stage.clone() else {
        return;
    };
    for (event, inside) in [("pointerenter", true), ("pointerleave", false)] {
        let targets = w.targets.clone();
        dom::add_passive_listener(&stage, event, move |_ev: web::PointerEvent| {
            targets.borrow_mut().set_hovering(inside);
        });
    }
}
