// Host-side tests for the CPU reference of the sphere shader.

use backdrop_core::scene::rgb_from_hex;
use backdrop_core::shading::*;
use glam::{Vec2, Vec3};

#[test]
fn hash_and_noise_stay_in_unit_range() {
    for i in 0..400 {
        let p = Vec3::new(i as f32 * 0.37 - 40.0, (i as f32 * 1.13).sin() * 9.0, i as f32 * 0.071);
        let h = hash(p);
        let n = noise(p);
        assert!((0.0..1.0).contains(&h), "hash {h} at {p:?}");
        assert!((-1e-5..=1.0 + 1e-5).contains(&n), "noise {n} at {p:?}");
    }
}

#[test]
fn noise_matches_hash_on_lattice_points() {
    for p in [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.0, 7.0)] {
        assert!((noise(p) - hash(p)).abs() < 1e-6);
    }
}

#[test]
fn rim_is_zero_facing_and_one_at_silhouette() {
    let n = Vec3::Z;
    assert!(rim(n, Vec3::Z).abs() < 1e-6);
    assert!((rim(n, Vec3::X) - 1.0).abs() < 1e-6);
    assert!((rim(n, -Vec3::Z) - 1.0).abs() < 1e-6);
    let half = rim(n, Vec3::new(0.0, 0.5f32.sqrt(), 0.5f32.sqrt()));
    assert!((half - (1.0 - 0.5f32.sqrt()).powf(2.2)).abs() < 1e-5);
}

#[test]
fn tonemap_is_bounded_and_monotonic() {
    let mut prev = -1.0;
    for i in 0..200 {
        let x = i as f32 * 0.1;
        let y = tonemap(Vec3::splat(x)).x;
        assert!((0.0..1.0).contains(&y), "tonemap({x}) = {y}");
        assert!(y >= prev);
        prev = y;
    }
    assert_eq!(tonemap(Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn smoothstep_clamps_outside_edges() {
    assert_eq!(smoothstep(0.45, 0.85, 0.0), 0.0);
    assert_eq!(smoothstep(0.45, 0.85, 1.0), 1.0);
    assert!((smoothstep(0.45, 0.85, 0.65) - 0.5).abs() < 1e-6);
}

#[test]
fn mouse_bias_sweeps_between_accents() {
    let a = rgb_from_hex(0xff5a3d);
    let b = rgb_from_hex(0x52c7ff);
    assert!(mouse_bias(Vec2::new(1.0, 0.5), a, b).distance(a) < 1e-5);
    assert!(mouse_bias(Vec2::new(0.0, 0.5), a, b).distance(b) < 1e-5);
    assert!(mouse_bias(Vec2::new(0.5, 0.5), a, b).distance((a + b) * 0.5) < 1e-5);
}

#[test]
fn flow_mask_drifts_slowly_without_motion() {
    // with motion 0 the field still drifts very slowly (0.02 rad/s)
    let p = Vec3::new(0.3, 0.8, 1.1);
    let m0 = flow_mask(p, 0.0, 0.0);
    let m1 = flow_mask(p, 0.001, 0.0);
    assert!((m0 - m1).abs() < 0.01);
    assert!((0.0..=1.0).contains(&m0));
}

#[test]
fn shaded_colors_are_finite_and_in_range() {
    let input = |pos: Vec3, normal: Vec3, t: f32, motion: f32| ShadeInput {
        position: pos,
        normal,
        time: t,
        mouse: Vec2::new(0.3, 0.6),
        accent: rgb_from_hex(0xff5a3d),
        accent2: rgb_from_hex(0x52c7ff),
        motion,
    };
    for i in 0..64 {
        let theta = i as f32 * 0.41;
        let dir = Vec3::new(theta.cos(), (theta * 0.7).sin(), theta.sin()).normalize();
        let c = shade(&input(dir * 1.45, dir, i as f32 * 0.25, 1.3));
        assert!(c.is_finite());
        assert!(c.min_element() >= 0.0 && c.max_element() < 1.0, "{c:?}");
    }
}

#[test]
fn shade_is_a_pure_function_of_its_inputs() {
    let input = ShadeInput {
        position: Vec3::new(0.2, 1.1, 0.9),
        normal: Vec3::new(0.1, 0.7, 0.6),
        time: 12.5,
        mouse: Vec2::new(0.8, 0.1),
        accent: rgb_from_hex(0xff5a3d),
        accent2: rgb_from_hex(0x52c7ff),
        motion: 1.0,
    };
    assert_eq!(shade(&input), shade(&input));
}
