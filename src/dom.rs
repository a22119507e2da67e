use backdrop_core::{ClientRect, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn query_canvas(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn client_rect(el: &web::Element) -> ClientRect {
    let r = el.get_bounding_client_rect();
    ClientRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn prefers_reduced_motion(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Measure a canvas and size its backing store to `floor(css * clamped dpr)`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let w = web::window()?;
    let inner = (
        w.inner_width().ok()?.as_f64().unwrap_or(0.0),
        w.inner_height().ok()?.as_f64().unwrap_or(0.0),
    );
    let client = (
        canvas.client_width().max(0) as u32,
        canvas.client_height().max(0) as u32,
    );
    let vp = Viewport::measure(client, inner, w.device_pixel_ratio());
    canvas.set_width(vp.buffer.width);
    canvas.set_height(vp.buffer.height);
    Some(vp)
}

#[inline]
pub fn set_display(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("display", value);
}

/// Register a passive listener that lives for the rest of the page.
pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once after `ms` milliseconds; returns the timer handle.
pub fn set_timeout(window: &web::Window, ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        .ok()
}
