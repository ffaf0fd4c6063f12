use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized at construction, so the parameter `t` passed
/// to [`Ray::at`] is a true Euclidean distance from the origin. Rays are
/// immutable values: reflected, refracted and shadow rays are new instances.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` must be non-zero; it is normalized here.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 0.0, 4.0));

        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        assert!((ray.direction() - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_ray_at_zero_is_origin() {
        let origins = [
            Vec3::ZERO,
            Vec3::new(1.0, -2.0, 3.5),
            Vec3::new(-100.0, 0.25, 7.0),
        ];
        let directions = [Vec3::X, Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, -7.0, 0.1)];

        for origin in origins {
            for direction in directions {
                let ray = Ray::new(origin, direction);
                assert_eq!(ray.at(0.0), origin);
                assert!((ray.direction().length() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_ray_at_is_euclidean_distance() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));

        assert_eq!(ray.at(1.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at(2.5), Vec3::new(0.0, 0.0, -2.5));
        assert!((ray.at(4.0).length() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec3::ZERO, Vec3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin(), ray2.origin());
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
