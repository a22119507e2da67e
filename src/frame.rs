use crate::render::GpuState;
use crate::style::TitleStyle;
use backdrop_core::{Animator, InputTargets};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Animator,
    pub targets: Rc<RefCell<InputTargets>>,
    pub gpu: Rc<RefCell<GpuState>>,
    pub title: Option<TitleStyle>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let targets = *self.targets.borrow();
        let state = self.animator.tick(elapsed, &targets);

        if let Some(title) = &mut self.title {
            title.apply(&state.title);
        }

        let mut gpu = self.gpu.borrow_mut();
        match gpu.render(&state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Drive `step` from `requestAnimationFrame` until it returns `false`.
///
/// Any pending request is cancelled before a new one is made, so there is
/// never more than one frame in flight.
pub fn start_loop(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            schedule(cb, &raf_clone);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        schedule(cb, &raf_id);
    }
}

fn schedule(cb: &Closure<dyn FnMut()>, raf_id: &Cell<i32>) {
    let Some(w) = web::window() else {
        return;
    };
    _ = w.cancel_animation_frame(raf_id.get());
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => raf_id.set(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}
