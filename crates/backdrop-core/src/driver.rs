//! Per-frame animation state.
//!
//! [`Animator`] owns every value that evolves from frame to frame: eased
//! pointer, hover and title-follow positions plus the sphere and starfield
//! transforms. The front-end calls [`Animator::tick`] once per display
//! refresh and hands the resulting [`FrameState`] to the renderer and the
//! title presentation layer.

use crate::constants::*;
use crate::easing::Eased;
use crate::input::InputTargets;
use crate::title::TitleVisual;
use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Euler rotation (XYZ order) plus translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Everything a frame needs to draw, computed by [`Animator::tick`].
#[derive(Clone, Copy, Debug)]
pub struct FrameState {
    pub time: f32,
    pub mouse: Vec2,
    pub motion: f32,
    pub sphere: Transform,
    pub stars: Transform,
    pub title: TitleVisual,
}

#[derive(Clone, Debug)]
pub struct Animator {
    reduced_motion: bool,
    pointer: Eased<Vec2>,
    title: Eased<Vec2>,
    hover: Eased<f32>,
    tilt: Vec2,
    sphere: Transform,
    stars: Transform,
}

impl Animator {
    /// `reduced_motion` is captured here and never re-read.
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            pointer: Eased::new(Vec2::splat(0.5)),
            title: Eased::new(Vec2::splat(0.5)),
            hover: Eased::new(0.0),
            tilt: Vec2::ZERO,
            sphere: Transform::default(),
            stars: Transform::default(),
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// 0 when reduced motion is requested, 1 otherwise. Scales every
    /// autonomous (not pointer-driven) motion term.
    #[inline]
    pub fn motion_base(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            1.0
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.current
    }

    pub fn hover(&self) -> f32 {
        self.hover.current
    }

    pub fn title_follow(&self) -> Vec2 {
        self.title.current
    }

    pub fn sphere(&self) -> Transform {
        self.sphere
    }

    pub fn stars(&self) -> Transform {
        self.stars
    }

    /// Advance one frame. `elapsed_sec` is wall time since startup.
    pub fn tick(&mut self, elapsed_sec: f32, targets: &InputTargets) -> FrameState {
        let base = self.motion_base();

        self.pointer.target = targets.pointer;
        self.title.target = targets.title;
        self.hover.target = targets.hover;
        self.tilt = targets.tilt;

        let mouse = self.pointer.step(POINTER_EASE);
        let hover = self.hover.step(HOVER_EASE);
        let follow = self.title.step(TITLE_EASE);

        let title = TitleVisual::compute(follow, hover, elapsed_sec * GRADIENT_SWEEP_RATE * base);
        let motion = base * (MOTION_HOVER_MIN + MOTION_HOVER_SPAN * hover);

        // Sphere: idle spin, pointer/tilt parallax, gentle bob
        let par_x = (mouse.y - 0.5 + self.tilt.y * PARALLAX_TILT_WEIGHT) * PARALLAX_X_GAIN;
        let par_y = (mouse.x - 0.5 + self.tilt.x * PARALLAX_TILT_WEIGHT) * PARALLAX_Y_GAIN;
        self.sphere.rotation.y += SPHERE_IDLE_SPIN * base;
        self.sphere.rotation.x = par_x;
        self.sphere.rotation.y += par_y * PARALLAX_Y_SPIN;
        self.sphere.position.z = (elapsed_sec * BOB_RATE).sin() * BOB_AMPLITUDE * base;

        self.stars.rotation.y -= STAR_DRIFT * base;
        self.stars.rotation.x = (mouse.y - 0.5) * STAR_TILT_GAIN;

        FrameState {
            time: elapsed_sec,
            mouse,
            motion,
            sphere: self.sphere,
            stars: self.stars,
            title,
        }
    }
}
