// Host-side tests for GPU uniform layouts and the normal matrix.

use backdrop_core::uniforms::*;
use glam::{Mat3, Mat4, Quat, Vec2, Vec3};
use std::mem::size_of;

#[test]
fn uniform_sizes_match_wgsl_layouts() {
    assert_eq!(size_of::<SphereUniforms>(), 256);
    assert_eq!(size_of::<StarUniforms>(), 160);
    // uniform buffers bind in 16-byte steps
    assert_eq!(size_of::<SphereUniforms>() % 16, 0);
    assert_eq!(size_of::<StarUniforms>() % 16, 0);
}

#[test]
fn normal_matrix_is_inverse_transpose() {
    let mv = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 0.5, 1.5),
        Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3),
        Vec3::new(1.0, -2.0, -6.0),
    );
    let expected = Mat3::from_mat4(mv).inverse().transpose();
    let got = normal_matrix(mv);
    assert!(got.abs_diff_eq(expected, 1e-5), "{got:?} vs {expected:?}");
}

#[test]
fn normal_matrix_of_rotation_is_the_rotation() {
    let mv = Mat4::from_rotation_z(1.1);
    assert!(normal_matrix(mv).abs_diff_eq(Mat3::from_mat4(mv), 1e-5));
}

#[test]
fn singular_matrix_yields_identity_normals() {
    let flat = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(normal_matrix(flat), Mat3::IDENTITY);
    assert_eq!(normal_matrix(Mat4::ZERO), Mat3::IDENTITY);
}

#[test]
fn sphere_uniforms_pack_colors_and_inputs() {
    let u = SphereUniforms::new(
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO, Vec3::Y),
        Mat4::perspective_rh(0.6, 1.5, 0.1, 100.0),
        Mat4::IDENTITY,
        Vec3::new(1.0, 0.5, 0.25),
        Vec3::new(0.1, 0.2, 0.3),
        Vec2::new(0.25, 0.75),
        [1280.0, 720.0],
        3.5,
        1.2,
    );
    assert_eq!(u.accent, [1.0, 0.5, 0.25, 1.0]);
    assert_eq!(u.accent2[3], 1.0);
    assert_eq!(u.mouse, [0.25, 0.75]);
    assert_eq!(u.resolution, [1280.0, 720.0]);
    assert_eq!(u.time, 3.5);
    assert_eq!(u.motion, 1.2);
    assert_eq!(bytemuck::bytes_of(&u).len(), 256);
}

#[test]
fn star_uniforms_carry_opacity_in_alpha() {
    let u = StarUniforms::new(
        Mat4::IDENTITY,
        Mat4::IDENTITY,
        Mat4::IDENTITY,
        Vec3::new(0.75, 0.84, 1.0),
        0.8,
        [800.0, 600.0],
        0.025,
    );
    assert_eq!(u.color, [0.75, 0.84, 1.0, 0.8]);
    assert_eq!(u.size, 0.025);
    assert_eq!(u.min_px, 1.0);
}
