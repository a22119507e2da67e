#![cfg(target_arch = "wasm32")]
use backdrop_core::{select_mode, Animator, InputTargets, Mode, PollPolicy, Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fallback;
mod fluid;
mod frame;
mod readiness;
mod render;
mod resize;
mod style;

use constants::*;

/// Owns everything the accelerated path shares between listeners and the
/// frame loop.
struct Backdrop {
    canvas: web::HtmlCanvasElement,
    gpu: Rc<RefCell<render::GpuState>>,
    targets: Rc<RefCell<InputTargets>>,
    animator: Animator,
}

impl Backdrop {
    fn new(canvas: web::HtmlCanvasElement, gpu: render::GpuState, animator: Animator) -> Self {
        Self {
            canvas,
            gpu: Rc::new(RefCell::new(gpu)),
            targets: Rc::new(RefCell::new(InputTargets::default())),
            animator,
        }
    }

    fn wire(&self, document: &web::Document) {
        events::wire_pointer_handlers(events::PointerWiring {
            surface: self.canvas.clone().into(),
            stage: dom::query_html(document, STAGE_SELECTOR),
            targets: self.targets.clone(),
        });
        events::wire_device_orientation(self.targets.clone());
        resize::wire_gpu_resize(self.canvas.clone(), self.gpu.clone());
    }

    fn start(self, document: &web::Document) {
        self.wire(document);
        let ctx = RefCell::new(frame::FrameContext {
            animator: self.animator,
            targets: self.targets,
            gpu: self.gpu,
            title: style::TitleStyle::from_document(document),
            started: Instant::now(),
        });
        frame::start_loop(move || {
            ctx.borrow_mut().frame();
            true
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("homepage-backdrop starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Read once; later changes to the preference are not tracked.
    let reduced_motion = dom::prefers_reduced_motion(&window, REDUCED_MOTION_QUERY);
    if reduced_motion {
        log::info!("reduced motion requested");
    }

    events::wire_nav_buttons(&document);
    fluid::activate(&document, RENDER_SURFACE_ID);

    let canvas = match dom::query_canvas(&document, WEBGL_CANVAS_SELECTOR) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[startup] {e}; using fallback");
            return fallback::run(&document, reduced_motion);
        }
    };
    let aspect = dom::sync_canvas_backing_size(&canvas)
        .map(|vp| vp.logical.aspect())
        .unwrap_or(1.0);
    let config = SceneConfig::default().with_reduced_motion(reduced_motion);
    let scene = Scene::build(&config, aspect, &mut rand::thread_rng());

    let mode = select_mode(
        readiness::webgpu_present,
        readiness::sleep,
        PollPolicy::default(),
        || render::GpuState::new(&canvas, &scene),
    )
    .await;

    match mode {
        Mode::Accelerated(gpu) => {
            log::info!("[startup] WebGPU renderer active");
            Backdrop::new(canvas, gpu, scene.animator()).start(&document);
            Ok(())
        }
        Mode::Fallback(reason) => {
            log::info!("[startup] 2D fallback active ({reason})");
            fallback::run(&document, reduced_motion)
        }
    }
}
