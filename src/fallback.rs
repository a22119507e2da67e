use crate::constants::{FALLBACK_CANVAS_SELECTOR, WEBGL_CANVAS_SELECTOR};
use crate::{dom, frame};
use backdrop_core::fallback::{fallback_frame, FallbackAnimator, FallbackFrame, RadialGradient};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Swap the accelerated canvas for the 2D one and start the gradient loop.
pub fn run(document: &web::Document, reduced_motion: bool) -> anyhow::Result<()> {
    if let Some(webgl) = dom::query_html(document, WEBGL_CANVAS_SELECTOR) {
        dom::set_display(&webgl, "none");
    }
    let canvas = dom::query_canvas(document, FALLBACK_CANVAS_SELECTOR)?;
    dom::set_display(&canvas, "block");
    dom::sync_canvas_backing_size(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let animator = Rc::new(RefCell::new(FallbackAnimator::new(reduced_motion)));

    // No debounce here: the 2D path is cheap to resize.
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        let ctx_resize = ctx.clone();
        let anim_resize = animator.clone();
        dom::add_passive_listener(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
            let anim = anim_resize.borrow();
            // resizing clears the buffer; a stopped loop needs its frame back
            if !anim.should_continue() {
                let f = fallback_frame(canvas_resize.width(), canvas_resize.height(), anim.phase());
                draw(&ctx_resize, &f);
            }
        });
    }

    frame::start_loop(move || {
        let mut anim = animator.borrow_mut();
        let f = anim.step(canvas.width(), canvas.height());
        draw(&ctx, &f);
        anim.should_continue()
    });
    Ok(())
}

/// Paint over the previous frame. The translucent backdrop is never cleared,
/// so the glow builds up over the first frames.
fn draw(ctx: &web::CanvasRenderingContext2d, frame: &FallbackFrame) {
    if let Some(g) = gradient(ctx, &frame.backdrop) {
        set_fill_style(ctx, &g);
        ctx.fill_rect(0.0, 0.0, frame.width, frame.height);
    }

    let disc = &frame.disc;
    ctx.save();
    _ = ctx.translate(disc.cx, disc.cy);
    _ = ctx.rotate(disc.rotation);
    if let Some(g) = gradient(ctx, &disc.gradient) {
        set_fill_style(ctx, &g);
        ctx.begin_path();
        _ = ctx.arc(0.0, 0.0, disc.radius, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
    ctx.restore();
}

fn gradient(ctx: &web::CanvasRenderingContext2d, desc: &RadialGradient) -> Option<JsValue> {
    let g = ctx
        .create_radial_gradient(desc.x0, desc.y0, desc.r0, desc.x1, desc.y1, desc.r1)
        .ok()?;
    for (offset, color) in &desc.stops {
        _ = g.add_color_stop(*offset, &color.css());
    }
    Some(g.into())
}

fn set_fill_style(ctx: &web::CanvasRenderingContext2d, value: &JsValue) {
    _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), value);
}
