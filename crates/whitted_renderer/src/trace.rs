//! Recursive Whitted tracer.
//!
//! A ray that hits a mirror or transmissive surface spawns a reflected and/or
//! refracted ray one level deeper, until the scene's `max_depth` is reached.
//! Every other hit, and any hit at the depth limit, is shaded locally.

use whitted_math::{reflect, refract};

use crate::{shade, Color, Ray, Scene};

/// Counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of rays traced, primary and recursive
    pub rays: u64,
    /// Deepest recursion level reached
    pub deepest: u32,
}

impl TraceStats {
    fn record(&mut self, depth: u32) {
        self.rays += 1;
        self.deepest = self.deepest.max(depth);
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &TraceStats) {
        self.rays += other.rays;
        self.deepest = self.deepest.max(other.deepest);
    }
}

/// Trace a ray at the given recursion depth (0 for camera rays).
///
/// Returns unclamped linear color.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    trace_with_stats(ray, scene, depth, &mut TraceStats::default())
}

/// Trace a ray and count every ray spawned into `stats`.
pub fn trace_with_stats(ray: &Ray, scene: &Scene, depth: u32, stats: &mut TraceStats) -> Color {
    stats.record(depth);

    let Some(rec) = scene.hit(ray) else {
        return scene.background;
    };
    let material = rec.material;

    if material.is_recursive() && depth < scene.max_depth {
        let mut color = Color::ZERO;

        if let Some(kr) = material.reflectance {
            let reflected = Ray::new(rec.p, reflect(-ray.direction(), rec.normal));
            color += kr * trace_with_stats(&reflected, scene, depth + 1, stats);
        }

        if let Some(kt) = material.transmittance {
            // Total internal reflection: no transmitted contribution
            if let Some(direction) = refract(ray.direction(), rec.normal, material.ior) {
                let refracted = Ray::new(rec.p, direction);
                color += kt * trace_with_stats(&refracted, scene, depth + 1, stats);
            }
        }

        return color;
    }

    let ambient = material.ambient.map_or(Color::ZERO, |ka| scene.ambient * ka);
    ambient + shade(scene, ray, &rec)
}
