use crate::dom;
use backdrop_core::{tilt_from_orientation, InputTargets};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed device tilt into the parallax targets. Readings overwrite each other;
/// nothing is smoothed here.
pub fn wire_device_orientation(targets: Rc<RefCell<InputTargets>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_passive_listener(
        &window,
        "deviceorientation",
        move |ev: web::DeviceOrientationEvent| {
            targets.borrow_mut().tilt = tilt_from_orientation(ev.gamma(), ev.beta());
        },
    );
}
