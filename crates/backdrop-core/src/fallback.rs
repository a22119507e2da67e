//! Frame description for the 2D-canvas fallback.
//!
//! The fallback draws a radial-gradient backdrop and a gradient disc standing
//! in for the sphere. [`FallbackAnimator`] decides what to draw and whether
//! another frame should be scheduled; the front-end just replays the
//! description onto a `CanvasRenderingContext2d`.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub const BACKDROP_INNER: Rgba = Rgba::new(82, 199, 255, 0.25);
pub const BACKDROP_OUTER: Rgba = Rgba::new(7, 10, 17, 1.0);
pub const DISC_CORE: Rgba = Rgba::new(255, 90, 61, 0.9);
pub const DISC_MID: Rgba = Rgba::new(82, 199, 255, 0.35);
pub const DISC_EDGE: Rgba = Rgba::new(10, 12, 18, 0.9);

/// Two-circle radial gradient, as taken by `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
    pub stops: Vec<(f32, Rgba)>,
}

/// Disc drawn in a local frame translated to `(cx, cy)` and rotated by
/// `rotation`; its gradient is expressed in that local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub rotation: f64,
    pub gradient: RadialGradient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallbackFrame {
    pub width: f64,
    pub height: f64,
    pub backdrop: RadialGradient,
    pub disc: Disc,
}

/// Compute the fallback frame for a buffer of `width x height` at phase `tt`.
pub fn fallback_frame(width: u32, height: u32, tt: f32) -> FallbackFrame {
    let w = width as f64;
    let h = height as f64;
    let backdrop = RadialGradient {
        x0: w * 0.5,
        y0: h * 0.55,
        r0: h * 0.05,
        x1: w * 0.5,
        y1: h * 0.5,
        r1: h * 0.6,
        stops: vec![(0.0, BACKDROP_INNER), (1.0, BACKDROP_OUTER)],
    };
    let r = w.min(h) * FALLBACK_DISC_SCALE as f64;
    let disc = Disc {
        cx: w * 0.5,
        cy: h * 0.5,
        radius: r,
        rotation: ((tt * FALLBACK_WOBBLE_RATE).sin() * FALLBACK_WOBBLE_ANGLE) as f64,
        gradient: RadialGradient {
            x0: -r * 0.3,
            y0: -r * 0.3,
            r0: r * 0.1,
            x1: 0.0,
            y1: 0.0,
            r1: r * 1.1,
            stops: vec![(0.0, DISC_CORE), (0.5, DISC_MID), (1.0, DISC_EDGE)],
        },
    };
    FallbackFrame {
        width: w,
        height: h,
        backdrop,
        disc,
    }
}

/// Phase and scheduling for the fallback loop.
#[derive(Clone, Debug)]
pub struct FallbackAnimator {
    reduced_motion: bool,
    tt: f32,
    frames: u64,
}

impl FallbackAnimator {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            tt: 0.0,
            frames: 0,
        }
    }

    /// Produce the next frame. Under reduced motion the phase stays frozen.
    pub fn step(&mut self, width: u32, height: u32) -> FallbackFrame {
        if !self.reduced_motion {
            self.tt += FALLBACK_TIME_STEP;
        }
        self.frames += 1;
        fallback_frame(width, height, self.tt)
    }

    /// Whether the loop should request another animation frame. Reduced
    /// motion renders a single static frame and stops.
    pub fn should_continue(&self) -> bool {
        !self.reduced_motion
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn phase(&self) -> f32 {
        self.tt
    }
}
