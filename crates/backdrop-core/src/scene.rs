//! Scene description built once at startup.
//!
//! A [`Scene`] is plain data: camera, sphere mesh, star positions and palette.
//! Rendering backends upload it; nothing here touches a GPU.

use crate::camera::Camera;
use crate::constants::*;
use crate::driver::Animator;
use crate::geometry::{self, SphereVertex};
use glam::Vec3;
use rand::Rng;

/// Convert a `0xRRGGBB` literal into linear 0..1 components (no gamma).
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub sphere_radius: f32,
    pub sphere_detail: u32,
    pub star_count: usize,
    pub star_radius: f32,
    pub star_size: f32,
    pub star_opacity: f32,
    pub star_color: u32,
    pub accent: u32,
    pub accent2: u32,
    pub clear_color: u32,
    pub reduced_motion: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere_radius: SPHERE_RADIUS,
            sphere_detail: SPHERE_DETAIL,
            star_count: STAR_COUNT,
            star_radius: STAR_SHELL_RADIUS,
            star_size: STAR_SIZE,
            star_opacity: STAR_OPACITY,
            star_color: STAR_COLOR,
            accent: ACCENT,
            accent2: ACCENT2,
            clear_color: CLEAR_COLOR,
            reduced_motion: false,
        }
    }
}

impl SceneConfig {
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub clear: Vec3,
    pub accent: Vec3,
    pub accent2: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarStyle {
    pub color: Vec3,
    pub opacity: f32,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub sphere: Vec<SphereVertex>,
    pub stars: Vec<Vec3>,
    pub palette: Palette,
    pub star_style: StarStyle,
    pub reduced_motion: bool,
}

impl Scene {
    pub fn build<R: Rng + ?Sized>(config: &SceneConfig, aspect: f32, rng: &mut R) -> Self {
        let sphere = geometry::icosphere(config.sphere_radius, config.sphere_detail);
        let stars = geometry::starfield(rng, config.star_count, config.star_radius);
        log::debug!(
            "[scene] sphere verts={} stars={} aspect={:.3}",
            sphere.len(),
            stars.len(),
            aspect
        );
        Self {
            camera: Camera::new(aspect),
            sphere,
            stars,
            palette: Palette {
                clear: rgb_from_hex(config.clear_color),
                accent: rgb_from_hex(config.accent),
                accent2: rgb_from_hex(config.accent2),
            },
            star_style: StarStyle {
                color: rgb_from_hex(config.star_color),
                opacity: config.star_opacity,
                size: config.star_size,
            },
            reduced_motion: config.reduced_motion,
        }
    }

    /// Animation driver for this scene, honoring its reduced-motion flag.
    pub fn animator(&self) -> Animator {
        Animator::new(self.reduced_motion)
    }
}
