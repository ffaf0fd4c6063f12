//! Triangle mesh geometry.
//!
//! A mesh is what the OBJ loader produces and what the renderer expands into
//! individual triangle shapes. It is intentionally decoupled from the
//! renderer's shape types.

use whitted_math::Vec3;

/// A mesh consisting of vertex positions, optional normals, and triangle indices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Vertex normals (optional - one per position when present)
    pub normals: Option<Vec<Vec3>>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices, optionally with normals.
    ///
    /// If normals are not provided, they will NOT be automatically computed.
    /// Call `compute_normals()` explicitly if you need them.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// Face normals are left unnormalized before accumulation, so larger
    /// faces weigh more. Winding is counter-clockwise, matching the flat
    /// normal `(p1 - p0) x (p2 - p0)` used for unsmoothed triangles.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for [i0, i1, i2] in self.triangles() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let edge1 = self.positions[i1] - p0;
            let edge2 = self.positions[i2] - p0;
            let face_normal = edge1.cross(edge2);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            // Isolated or fully degenerate vertices get an arbitrary up normal
            *normal = normal.try_normalize().unwrap_or(Vec3::Y);
        }

        self.normals = Some(normals);
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|face| [face[0], face[1], face[2]])
    }

    /// Get vertex count.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Faces whose squared sine between edges falls below this have no usable
/// area, whatever their size.
const DEGENERATE_SIN2: f32 = 1e-10;

/// Unit counter-clockwise normal `normalize((p1 - p0) x (p2 - p0))`, or `None`
/// when the triangle is degenerate.
///
/// The test is relative to the edge lengths, so rounding noise in the cross
/// product of nearly collinear vertices is not mistaken for a real face.
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Option<Vec3> {
    let e0 = p1 - p0;
    let e1 = p2 - p0;
    let cross = e0.cross(e1);
    if cross.length_squared() <= DEGENERATE_SIN2 * e0.length_squared() * e1.length_squared() {
        return None;
    }
    cross.try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        // Unit quad in the XY plane, counter-clockwise seen from +Z
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
            None,
        )
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [0, 2, 3]]);
        assert!(!mesh.has_normals());
    }

    #[test]
    fn test_compute_normals_flat_quad() {
        let mut mesh = quad();
        mesh.compute_normals();

        let normals = mesh.normals.as_ref().unwrap();
        assert_eq!(normals.len(), 4);
        for n in normals {
            assert!((*n - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_compute_normals_averages_shared_vertices() {
        // Two faces folded 90 degrees along the X axis
        let mut mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            vec![0, 1, 2, 0, 3, 1],
            None,
        );
        mesh.compute_normals();

        let normals = mesh.normals.unwrap();
        let expected = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert!((normals[0] - expected).length() < 1e-6);
        assert!((normals[1] - expected).length() < 1e-6);
        assert!((normals[2] - Vec3::Z).length() < 1e-6);
        assert!((normals[3] - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_compute_normals_unreferenced_vertex() {
        let mut mesh = quad();
        mesh.positions.push(Vec3::new(5.0, 5.0, 5.0));
        mesh.compute_normals();

        assert_eq!(mesh.normals.unwrap()[4], Vec3::Y);
    }

    #[test]
    fn test_face_normal() {
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
        assert!((n - Vec3::Z).length() < 1e-6);

        // Tiny but well-shaped faces are fine
        let small = face_normal(Vec3::ZERO, Vec3::X * 1e-3, Vec3::Y * 1e-3);
        assert!(small.is_some());
    }

    #[test]
    fn test_face_normal_collinear_vertices() {
        assert!(face_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0).is_none());
        assert!(face_normal(Vec3::ONE, Vec3::ONE, Vec3::Y).is_none());

        // Collinear in exact arithmetic, not in f32
        let p0 = Vec3::new(0.0, 0.0, -1.0);
        let p1 = Vec3::new(0.1, 0.3, -1.0);
        let p2 = Vec3::new(0.7, 2.1, -1.0);
        assert!(face_normal(p0, p1, p2).is_none());
        assert!(face_normal(p2, p0, p1).is_none());
    }
}
