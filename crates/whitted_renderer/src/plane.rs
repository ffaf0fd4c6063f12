//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use whitted_math::{Interval, Vec3};

/// Denominators below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` with a constant unit normal.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let denom = ray.direction().dot(self.normal);

        // Ray is parallel to the plane (or the normal is degenerate)
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        Some(HitRecord {
            t,
            p: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Arc::new(Material::diffuse(Color::splat(0.5))),
        )
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(3.0, 4.0, 1.0), -Vec3::Y);

        let rec = plane.hit(&ray, Interval::from_epsilon()).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-5);
        assert!((rec.p - Vec3::new(3.0, -1.0, 1.0)).length() < 1e-5);
        // Normal is stored normalized and constant
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_hit_from_below_keeps_normal() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);

        let rec = plane.hit(&ray, Interval::from_epsilon()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = floor();
        let origins = [
            Vec3::ZERO,
            Vec3::new(0.0, -1.0, 0.0), // in the plane itself
            Vec3::new(5.0, -7.0, 2.0),
        ];
        let directions = [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, -3.0)];

        for origin in origins {
            for direction in directions {
                let ray = Ray::new(origin, direction);
                assert!(plane.hit(&ray, Interval::from_epsilon()).is_none());
            }
        }
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = floor();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(plane.hit(&ray, Interval::from_epsilon()).is_none());
    }

    #[test]
    fn test_plane_out_of_range_misses() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 9.0, 0.0), -Vec3::Y);

        assert!(plane.hit(&ray, Interval::new(Interval::EPSILON, 9.0)).is_none());
        assert!(plane.hit(&ray, Interval::new(Interval::EPSILON, 10.0)).is_some());
    }
}
