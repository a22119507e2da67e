//! GPU uniform layouts. Field order and padding match the WGSL structs in
//! `shaders/`.

use glam::{Mat3, Mat4, Vec2, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    // mat3 stored as mat4 columns to sidestep WGSL mat3x3 padding
    pub normal_matrix: [[f32; 4]; 4],
    pub accent: [f32; 4],
    pub accent2: [f32; 4],
    pub mouse: [f32; 2],
    pub resolution: [f32; 2],
    pub time: f32,
    pub motion: f32,
    pub _pad: [f32; 2],
}

impl SphereUniforms {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        view: Mat4,
        proj: Mat4,
        model: Mat4,
        accent: Vec3,
        accent2: Vec3,
        mouse: Vec2,
        resolution: [f32; 2],
        time: f32,
        motion: f32,
    ) -> Self {
        Self {
            view_proj: (proj * view).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(normal_matrix(view * model)).to_cols_array_2d(),
            accent: accent.extend(1.0).to_array(),
            accent2: accent2.extend(1.0).to_array(),
            mouse: mouse.to_array(),
            resolution,
            time,
            motion,
            _pad: [0.0; 2],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarUniforms {
    pub proj: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    /// rgb + opacity
    pub color: [f32; 4],
    pub resolution: [f32; 2],
    /// World-space point size, attenuated by view depth.
    pub size: f32,
    /// Lower bound on the on-screen size in pixels.
    pub min_px: f32,
}

impl StarUniforms {
    pub fn new(
        view: Mat4,
        proj: Mat4,
        model: Mat4,
        color: Vec3,
        opacity: f32,
        resolution: [f32; 2],
        size: f32,
    ) -> Self {
        Self {
            proj: proj.to_cols_array_2d(),
            model_view: (view * model).to_cols_array_2d(),
            color: color.extend(opacity).to_array(),
            resolution,
            size,
            min_px: 1.0,
        }
    }
}

/// Inverse-transpose of the upper 3x3 of a model-view matrix.
#[inline]
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model_view);
    if m.determinant().abs() <= f32::EPSILON {
        return Mat3::IDENTITY;
    }
    m.inverse().transpose()
}
