//! CPU reference of the sphere's fragment shader (`shaders/sphere.wgsl`).
//!
//! Keep the two in step: the GPU path is what users see, this one is what the
//! tests can reach.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

const BASE_DARK: Vec3 = Vec3::new(0.02, 0.04, 0.08);
const BASE_LIGHT: Vec3 = Vec3::new(0.05, 0.08, 0.12);
const FLOW_SCALE: f32 = 2.5;
const RIM_POWER: f32 = 2.2;
const SPEC_POWER: f32 = 24.0;

#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn fract3(v: Vec3) -> Vec3 {
    v - v.floor()
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Lattice hash in `[0, 1)`.
#[inline]
pub fn hash(p: Vec3) -> f32 {
    let p = fract3(p * 0.318_309_9 + Vec3::new(0.1, 0.2, 0.3)) * 17.0;
    fract(p.x * p.y * p.z * (p.x + p.y + p.z))
}

/// Smoothed value noise: trilinear blend of the eight surrounding lattice
/// hashes with a cubic fade.
pub fn noise(x: Vec3) -> f32 {
    let p = x.floor();
    let f = x - p;
    let f = f * f * (Vec3::splat(3.0) - 2.0 * f);
    let h = |dx: f32, dy: f32, dz: f32| hash(p + Vec3::new(dx, dy, dz));
    mix(
        mix(
            mix(h(0.0, 0.0, 0.0), h(1.0, 0.0, 0.0), f.x),
            mix(h(0.0, 1.0, 0.0), h(1.0, 1.0, 0.0), f.x),
            f.y,
        ),
        mix(
            mix(h(0.0, 0.0, 1.0), h(1.0, 0.0, 1.0), f.x),
            mix(h(0.0, 1.0, 1.0), h(1.0, 1.0, 1.0), f.x),
            f.y,
        ),
        f.z,
    )
}

/// Three-octave flowing mask, thresholded to `0..1`.
pub fn flow_mask(position: Vec3, time: f32, motion: f32) -> f32 {
    let t = time * (0.6 * motion + 0.02);
    let p = position.normalize_or_zero() * FLOW_SCALE;
    let n = 0.55 * noise(p + Vec3::new(t, 0.0, -t))
        + 0.30 * noise(p * 2.0 + Vec3::new(-t * 1.4, t * 1.1, t * 0.7))
        + 0.15 * noise(p * 4.0 + Vec3::new(t * 0.7, -t * 1.3, t * 0.9));
    smoothstep(0.45, 0.85, n)
}

#[inline]
pub fn rim(normal: Vec3, view: Vec3) -> f32 {
    (1.0 - normal.dot(view).max(0.0)).powf(RIM_POWER)
}

/// Filmic-style curve mapping HDR values into `0..1`.
pub fn tonemap(c: Vec3) -> Vec3 {
    let c = (c - Vec3::splat(0.004)).max(Vec3::ZERO);
    (c * (6.2 * c + 0.5)) / (c * (6.2 * c + 1.7) + 0.06)
}

/// Accent blend driven by the pointer's horizontal position.
#[inline]
pub fn mouse_bias(mouse: Vec2, accent: Vec3, accent2: Vec3) -> Vec3 {
    let angle = (mouse.x - 0.5) * PI;
    accent2.lerp(accent, 0.5 + 0.5 * angle.sin())
}

#[inline]
fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - 2.0 * n.dot(i) * n
}

#[derive(Clone, Copy, Debug)]
pub struct ShadeInput {
    /// Object-space surface position.
    pub position: Vec3,
    /// View-space surface normal.
    pub normal: Vec3,
    pub time: f32,
    pub mouse: Vec2,
    pub accent: Vec3,
    pub accent2: Vec3,
    pub motion: f32,
}

/// Final sphere color for one fragment.
pub fn shade(input: &ShadeInput) -> Vec3 {
    let n = input.normal.normalize_or_zero();
    let v = (-input.position).normalize_or_zero();
    let l1 = Vec3::new(0.6, 0.8, 0.5).normalize();
    let l2 = Vec3::new(-0.7, -0.2, 0.6).normalize();

    let bias = mouse_bias(input.mouse, input.accent, input.accent2);
    let flow = flow_mask(input.position, input.time, input.motion);
    let rim = rim(n, v);

    let diff = n.dot(l1).max(0.0) * 0.8 + n.dot(l2).max(0.0) * 0.4;
    let spec = reflect(-l1, n).dot(v).max(0.0).powf(SPEC_POWER) * 0.5;

    let base = BASE_DARK.lerp(BASE_LIGHT, diff);
    let boost = 0.9 + 0.6 * input.motion;
    let emission = input.accent2.lerp(input.accent, flow) * boost * (0.35 + 1.2 * flow + 0.8 * rim)
        + spec * bias;

    let col = tonemap(base + emission);
    let vignette = smoothstep(-0.1, 0.9, n.dot(v));
    col * mix(0.85, 1.0, vignette)
}
