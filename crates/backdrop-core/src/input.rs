use crate::constants::TILT_DEG_PER_UNIT;
use glam::Vec2;

/// Latest raw input targets. Event handlers overwrite fields; the animation
/// driver eases toward them once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputTargets {
    /// Pointer position normalized to the render surface.
    pub pointer: Vec2,
    /// Pointer position normalized to the title stage element.
    pub title: Vec2,
    /// 1.0 while the pointer is over the stage, 0.0 otherwise.
    pub hover: f32,
    /// Device orientation, roughly -2..2 on each axis.
    pub tilt: Vec2,
}

impl Default for InputTargets {
    fn default() -> Self {
        Self {
            pointer: Vec2::splat(0.5),
            title: Vec2::splat(0.5),
            hover: 0.0,
            tilt: Vec2::ZERO,
        }
    }
}

impl InputTargets {
    pub fn set_hovering(&mut self, inside: bool) {
        self.hover = if inside { 1.0 } else { 0.0 };
    }
}

/// Client-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a client-space point into `rect`'s unit square.
///
/// Points outside the rect map outside `0..1`; the title tilt relies on that
/// to keep following the pointer across the page. A degenerate rect maps to
/// the center.
#[inline]
pub fn normalized_in_rect(client_x: f64, client_y: f64, rect: ClientRect) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::splat(0.5);
    }
    Vec2::new(
        ((client_x - rect.left) / rect.width) as f32,
        ((client_y - rect.top) / rect.height) as f32,
    )
}

/// Convert device orientation angles (degrees) into a tilt vector.
/// `gamma` is left-right, `beta` is front-back; missing readings count as 0.
#[inline]
pub fn tilt_from_orientation(gamma: Option<f64>, beta: Option<f64>) -> Vec2 {
    Vec2::new(
        (gamma.unwrap_or(0.0) / TILT_DEG_PER_UNIT) as f32,
        (beta.unwrap_or(0.0) / TILT_DEG_PER_UNIT) as f32,
    )
}
