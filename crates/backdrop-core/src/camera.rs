use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking down -Z at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Clip-space projection with a 0..1 depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
