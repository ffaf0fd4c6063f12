//! Camera for ray generation.

use whitted_core::CameraDescription;

use crate::{Ray, Vec3};

/// Pinhole camera mapping normalized image coordinates to primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position, origin of every primary ray
    center: Vec3,
    /// Bottom-left corner of the image plane, one unit in front of the eye
    lower_left: Vec3,
    /// Full width of the image plane
    horizontal: Vec3,
    /// Full height of the image plane
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `eye` looking at `target`.
    ///
    /// `vfov` is the vertical field of view in degrees and `aspect` the
    /// image width over its height.
    pub fn new(eye: Vec3, target: Vec3, up: Vec3, vfov: f32, aspect: f32) -> Self {
        // Calculate viewport dimensions
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * aspect;

        // Calculate camera basis vectors
        let w = (eye - target).normalize_or_zero();
        let u = up.cross(w).normalize_or_zero();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;

        Self {
            center: eye,
            lower_left: eye - w - horizontal / 2.0 - vertical / 2.0,
            horizontal,
            vertical,
        }
    }

    /// Create a camera from a scene file's camera block.
    pub fn from_description(description: &CameraDescription, aspect: f32) -> Self {
        Self::new(
            description.eye,
            description.target,
            description.up,
            description.fov,
            aspect,
        )
    }

    /// Generate the ray through normalized image coordinates `x, y ∈ [0,1)`,
    /// with `(0, 0)` at the bottom-left.
    pub fn camera_ray(&self, x: f32, y: f32) -> Ray {
        let target = self.lower_left + x * self.horizontal + y * self.vertical;
        Ray::new(self.center, target - self.center)
    }

    /// Eye position.
    pub fn center(&self) -> Vec3 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 2.0)
    }

    #[test]
    fn test_center_ray_looks_at_target() {
        let ray = camera().camera_ray(0.5, 0.5);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - -Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays() {
        let camera = camera();

        // 90 degree vertical fov: the image plane at unit distance spans
        // y in [-1, 1], and x in [-2, 2] for a 2:1 aspect
        let bottom_left = camera.camera_ray(0.0, 0.0);
        let expected = Vec3::new(-2.0, -1.0, -1.0).normalize();
        assert!((bottom_left.direction() - expected).length() < 1e-5);

        let top = camera.camera_ray(0.5, 1.0);
        let expected = Vec3::new(0.0, 1.0, -1.0).normalize();
        assert!((top.direction() - expected).length() < 1e-5);
    }

    #[test]
    fn test_from_description() {
        let description = CameraDescription {
            eye: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::new(0.0, 2.0, 0.0),
            up: Vec3::Y,
            fov: 45.0,
        };
        let camera = Camera::from_description(&description, 4.0 / 3.0);

        assert_eq!(camera.center(), description.eye);
        let ray = camera.camera_ray(0.5, 0.5);
        assert!((ray.direction() - -Vec3::Z).length() < 1e-6);
    }
}
