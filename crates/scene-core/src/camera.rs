//! Perspective camera used to view the cube.
//!
//! The camera stays on the Z axis looking at the origin; only its depth and
//! aspect ratio change over the page lifetime (scroll timeline and resize).

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3};

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            position: Vec3::ZERO,
            up: Vec3::Y,
            fov_deg,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// The stock scene camera: 50° fov, 0.1..1000 clip range, 3 units back.
    pub fn for_aspect(aspect: f32) -> Self {
        let mut cam = Self::new(CAMERA_FOV_DEG, aspect, CAMERA_NEAR, CAMERA_FAR);
        cam.position.z = CAMERA_Z;
        cam
    }

    /// Recompute the cached projection after changing fov, aspect or clip planes.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World to view transform, always looking down -Z from `position`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_camera_sits_three_units_back() {
        let cam = PerspectiveCamera::for_aspect(2.0);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(cam.fov_deg, 50.0);
        assert_eq!(cam.near, 0.1);
        assert_eq!(cam.far, 1000.0);
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let cam = PerspectiveCamera::for_aspect(1.5);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
