//! Local Phong illumination with hard shadows.

use whitted_math::reflect;

use crate::{Color, HitRecord, LightSample, Ray, Scene, Vec3};

/// Sum the diffuse and specular contributions of every light that reaches
/// the hit point unoccluded.
///
/// Ambient light is not included, the tracer adds it.
pub fn shade(scene: &Scene, ray: &Ray, rec: &HitRecord<'_>) -> Color {
    let material = rec.material;
    let view = -ray.direction();

    let mut color = Color::ZERO;
    for light in scene.lights() {
        let Some(sample) = light.sample(rec.p) else {
            continue;
        };
        if is_occluded(scene, rec.p, &sample) {
            continue;
        }

        if let Some(kd) = material.diffuse {
            color += sample.intensity * kd * rec.normal.dot(sample.direction).max(0.0);
        }

        if let Some(ks) = material.specular {
            let r = reflect(sample.direction, rec.normal);
            color += sample.intensity * ks * r.dot(view).max(0.0).powf(material.shininess);
        }
    }

    color
}

/// Check whether anything lies strictly between `point` and the light.
fn is_occluded(scene: &Scene, point: Vec3, sample: &LightSample) -> bool {
    let shadow_ray = Ray::new(point, sample.direction);
    scene
        .hit(&shadow_ray)
        .is_some_and(|blocker| blocker.t < sample.distance_from(point))
}
