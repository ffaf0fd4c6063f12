//! Closed set of primitive shapes.

use crate::{HitRecord, Hittable, Plane, Ray, Sphere, Triangle};
use whitted_math::Interval;

/// Any primitive the renderer can intersect.
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Hittable for Shape {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Shape::Plane(plane) => plane.hit(ray, ray_t),
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::Triangle(triangle) => triangle.hit(ray, ray_t),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}
