use js_sys::{Promise, Reflect};
use std::time::Duration;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// True once the browser exposes WebGPU (`navigator.gpu`).
pub fn webgpu_present() -> bool {
    web::window()
        .map(|w| w.navigator())
        .and_then(|nav| Reflect::get(&nav, &JsValue::from_str("gpu")).ok())
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

/// Resolve after `dur`, driven by `setTimeout`.
pub async fn sleep(dur: Duration) {
    let ms = dur.as_millis().min(i32::MAX as u128) as i32;
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            if w
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .is_ok()
            {
                return;
            }
        }
        // no timer available: resolve right away rather than hang
        _ = resolve.call0(&JsValue::UNDEFINED);
    });
    _ = JsFuture::from(promise).await;
}
