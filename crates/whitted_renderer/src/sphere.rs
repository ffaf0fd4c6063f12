//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use whitted_math::{Interval, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero, and a
    /// zero-radius sphere is never hit.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if self.radius <= 0.0 {
            return None;
        }

        // Ray directions are unit length, so the quadratic's `a` term is 1
        let oc = self.center - ray.origin();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = h - sqrtd;
        if !ray_t.contains(root) {
            root = h + sqrtd;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Arc::new(Material::diffuse(Color::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit_through_center() {
        let center = Vec3::new(1.0, 2.0, -7.0);
        let sphere = Sphere::new(center, 1.5, Arc::new(Material::default()));

        let origin = Vec3::new(-2.0, 0.5, 3.0);
        let ray = Ray::new(origin, center - origin);

        let rec = sphere.hit(&ray, Interval::from_epsilon()).unwrap();
        let expected = origin.distance(center) - 1.5;
        assert!((rec.t - expected).abs() < 1e-4);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        assert!((rec.normal + ray.direction()).length() < 1e-4);
    }

    #[test]
    fn test_sphere_hit_from_inside_takes_far_root() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, Interval::from_epsilon()).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-5);
        // Normal stays outward even though the ray is inside
        assert!((rec.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_near_root_out_of_range_uses_far_root() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        let rec = sphere.hit(&ray, Interval::new(4.5, 10.0)).unwrap();
        assert!((rec.t - 6.0).abs() < 1e-5);

        assert!(sphere.hit(&ray, Interval::new(4.5, 5.5)).is_none());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));

        // Ray pointing away from sphere
        let away = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.hit(&away, Interval::from_epsilon()).is_none());

        // Ray passing beside it
        let beside = Ray::new(Vec3::new(2.0, 0.0, 0.0), -Vec3::Z);
        assert!(sphere.hit(&beside, Interval::from_epsilon()).is_none());
    }

    #[test]
    fn test_sphere_surface_origin_is_excluded_by_epsilon() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::Z, Vec3::Z);

        assert!(sphere.hit(&ray, Interval::from_epsilon()).is_none());
    }

    #[test]
    fn test_zero_radius_never_hits() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), -1.0, Arc::new(Material::default()));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(sphere.hit(&ray, Interval::from_epsilon()).is_none());
    }
}
