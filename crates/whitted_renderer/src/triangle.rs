//! Triangle primitive for ray tracing.
//!
//! Solves `O + t·d = α·P0 + β·P1 + γ·P2` (with `γ = 1 − α − β`) for
//! `(t, α, β)` by Cramer's rule on the 3×3 system whose columns are the ray
//! direction and the edges `P2 − P0`, `P2 − P1`.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use whitted_core::face_normal;
use whitted_math::{Interval, Mat3, Vec3};

/// Determinants below this fraction of `|e0|·|e1|` mean the ray is parallel
/// to the triangle.
const DETERMINANT_EPSILON: f32 = 1e-7;

/// A triangle primitive.
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Per-vertex normals for smooth shading
    vertex_normals: Option<[Vec3; 3]>,
    /// Pre-computed face normal (unit length, zero when degenerate)
    normal: Vec3,
    /// Material
    material: Arc<Material>,
}

/// Ray parameter and barycentric weights of a triangle hit.
#[derive(Debug, Clone, Copy)]
struct Barycentric {
    t: f32,
    alpha: f32,
    beta: f32,
    gamma: f32,
}

impl Triangle {
    /// Create a new flat-shaded triangle from three vertices.
    ///
    /// The face normal follows counter-clockwise winding:
    /// `normalize((v1 - v0) x (v2 - v0))`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        Self {
            v0,
            v1,
            v2,
            vertex_normals: None,
            normal: Self::face_normal(v0, v1, v2),
            material,
        }
    }

    /// Create a smooth-shaded triangle that interpolates per-vertex normals.
    pub fn with_vertex_normals(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normals: [Vec3; 3],
        material: Arc<Material>,
    ) -> Self {
        Self {
            vertex_normals: Some(normals),
            ..Self::new(v0, v1, v2, material)
        }
    }

    /// Unit face normal, zero for a degenerate triangle.
    pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
        face_normal(v0, v1, v2).unwrap_or(Vec3::ZERO)
    }

    /// Check if the triangle has no area.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }

    fn barycentric(&self, ray: &Ray, ray_t: Interval) -> Option<Barycentric> {
        let d = ray.direction();
        let e0 = self.v2 - self.v0;
        let e1 = self.v2 - self.v1;
        let rhs = self.v2 - ray.origin();

        let det = Mat3::from_cols(d, e0, e1).determinant();
        if det.abs() <= DETERMINANT_EPSILON * e0.length() * e1.length() {
            return None;
        }

        let alpha = Mat3::from_cols(d, rhs, e1).determinant() / det;
        let beta = Mat3::from_cols(d, e0, rhs).determinant() / det;
        if alpha < 0.0 || beta < 0.0 || alpha + beta > 1.0 {
            return None;
        }

        let t = Mat3::from_cols(rhs, e0, e1).determinant() / det;
        if !ray_t.contains(t) {
            return None;
        }

        Some(Barycentric {
            t,
            alpha,
            beta,
            gamma: 1.0 - alpha - beta,
        })
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if self.is_degenerate() {
            return None;
        }
        let bary = self.barycentric(ray, ray_t)?;

        let normal = match self.vertex_normals {
            Some([n0, n1, n2]) => (bary.alpha * n0 + bary.beta * n1 + bary.gamma * n2)
                .try_normalize()
                .unwrap_or(self.normal),
            None => self.normal,
        };

        Some(HitRecord {
            t: bary.t,
            p: ray.at(bary.t),
            normal,
            material: &self.material,
        })
    }
}
