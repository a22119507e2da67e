use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Page-provided ambient fluid effect bound to its own canvas.
    type Fluid;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web::Element) -> Result<Fluid, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn activate(this: &Fluid) -> Result<(), JsValue>;
}

/// Start the page's fluid effect on `#<surface_id>` if both exist.
pub fn activate(document: &web::Document, surface_id: &str) {
    let Some(surface) = document.get_element_by_id(surface_id) else {
        return;
    };
    let fluid = match Fluid::new(&surface) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("[fluid] effect unavailable: {:?}", e);
            return;
        }
    };
    if let Err(e) = fluid.activate() {
        log::warn!("[fluid] activate failed: {:?}", e);
    }
}
