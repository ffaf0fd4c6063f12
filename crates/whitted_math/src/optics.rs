//! Mirror and Snell's-law direction formulas shared by shading and tracing.

use crate::Vec3;

/// Mirror `l` about the unit normal `n`: `2(n·l)n − l`.
///
/// `l` points away from the surface (toward a light, or back toward a ray's
/// origin); the result points away from the surface too.
#[inline]
pub fn reflect(l: Vec3, n: Vec3) -> Vec3 {
    2.0 * n.dot(l) * n - l
}

/// Refract the incoming direction `l` through a surface with unit normal `n`
/// and index of refraction `ior`.
///
/// `l` is the direction of travel (pointing into the surface). The side of the
/// surface the ray arrives from is read off the sign of `n·l`: against the
/// normal means entering the medium (`mu = 1/ior`), along it means leaving
/// (`mu = ior`). Returns `None` on total internal reflection.
pub fn refract(l: Vec3, n: Vec3, ior: f32) -> Option<Vec3> {
    let cos_i = l.dot(n);
    let mu = if cos_i < 0.0 { 1.0 / ior } else { ior };

    let sin_i2 = 1.0 - cos_i * cos_i;
    if mu * mu * sin_i2 > 1.0 {
        return None;
    }

    let sin_r = mu * sin_i2.max(0.0).sqrt();
    let cos_r = (1.0 - sin_r * sin_r).max(0.0).sqrt();

    let normal_scale = if cos_i > 0.0 {
        -mu * cos_i + cos_r
    } else {
        -mu * cos_i - cos_r
    };

    (mu * l + normal_scale * n).try_normalize()
}
