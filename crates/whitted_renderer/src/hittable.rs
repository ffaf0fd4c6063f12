//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray, Shape};
use whitted_math::{Interval, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs (a distance, rays are unit length)
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, outward for the surface (not flipped toward the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the nearest hit with `t` inside `ray_t`, or `None`. Parallel
    /// rays and degenerate geometry are reported as `None`, never as NaN.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered list of shapes searched linearly for the nearest hit.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Shape>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a shape to the end of the list.
    pub fn add(&mut self, object: impl Into<Shape>) {
        self.objects.push(object.into());
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    /// Each accepted hit shrinks the upper bound to its own `t`, so later
    /// shapes are only tested against the closer range. On equal `t` the
    /// shape earlier in the list keeps the hit.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut interval = ray_t;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, interval) {
                if closest.map_or(true, |c| rec.t < c.t) {
                    interval = interval.with_max(rec.t);
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}
