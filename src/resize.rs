use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Call `on_resize` once the window has stopped resizing for
/// `RESIZE_DEBOUNCE_MS`. Each new event restarts the timer.
pub fn wire_debounced_resize(on_resize: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let on_resize = Rc::new(RefCell::new(on_resize));

    let win = window.clone();
    dom::add_passive_listener(&window, "resize", move |_: web::Event| {
        if let Some(handle) = pending.take() {
            win.clear_timeout_with_handle(handle);
        }
        let cb = on_resize.clone();
        let pending_done = pending.clone();
        let handle = dom::set_timeout(&win, RESIZE_DEBOUNCE_MS, move || {
            pending_done.set(None);
            (*cb.borrow_mut())();
        });
        pending.set(handle);
    });
}

/// Resize the accelerated canvas and renderer to the current viewport.
pub fn apply_gpu_resize(canvas: &web::HtmlCanvasElement, gpu: &RefCell<GpuState>) {
    let Some(vp) = dom::sync_canvas_backing_size(canvas) else {
        return;
    };
    log::debug!(
        "[resize] {}x{} css @ {:.2} -> {}x{}",
        vp.logical.width,
        vp.logical.height,
        vp.dpr,
        vp.buffer.width,
        vp.buffer.height
    );
    gpu.borrow_mut().resize(vp.buffer, vp.logical.aspect());
}

/// Keep the renderer in step with the viewport: once now, then debounced.
pub fn wire_gpu_resize(canvas: web::HtmlCanvasElement, gpu: Rc<RefCell<GpuState>>) {
    apply_gpu_resize(&canvas, &gpu);
    wire_debounced_resize(move || apply_gpu_resize(&canvas, &gpu));
}
