//! Wavefront OBJ loading.
//!
//! Only geometry is read: `v` records become positions and `f` records become
//! triangles (polygons are fan-triangulated). Texture coordinates, normals,
//! groups and material libraries are skipped; smooth normals are recomputed by
//! [`Mesh::compute_normals`] when a scene asks for them.

use std::path::Path;

use thiserror::Error;
use whitted_math::Vec3;

use crate::mesh::Mesh;

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Vertex index {index} out of range at line {line}")]
    IndexOutOfRange { line: usize, index: i64 },
}

pub type ObjResult<T> = Result<T, ObjError>;

/// Records that carry no geometry we use.
const IGNORED_RECORDS: &[&str] = &["vt", "vn", "vp", "g", "o", "s", "l", "p", "usemtl", "mtllib"];

/// Load an OBJ file from disk.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<Mesh> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&source)?;

    log::debug!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Parse OBJ text into a mesh.
pub fn parse_obj(source: &str) -> ObjResult<Mesh> {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for (line_index, raw) in source.lines().enumerate() {
        let line = line_index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        let mut tokens = content.split_whitespace();

        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => positions.push(parse_position(tokens, line)?),
            "f" => {
                let face = tokens
                    .map(|token| parse_face_index(token, positions.len(), line))
                    .collect::<ObjResult<Vec<u32>>>()?;

                if face.len() < 3 {
                    return Err(ObjError::Parse {
                        line,
                        message: format!("face needs at least 3 vertices, got {}", face.len()),
                    });
                }

                // Fan triangulation around the first vertex
                for k in 1..face.len() - 1 {
                    indices.extend_from_slice(&[face[0], face[k], face[k + 1]]);
                }
            }
            other if IGNORED_RECORDS.contains(&other) => {}
            other => log::warn!("Skipping unsupported OBJ record '{}' at line {}", other, line),
        }
    }

    Ok(Mesh::new(positions, indices, None))
}

fn parse_position<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> ObjResult<Vec3> {
    let mut coords = [0.0f32; 3];
    for coord in &mut coords {
        let token = tokens.next().ok_or_else(|| ObjError::Parse {
            line,
            message: "vertex needs 3 coordinates".to_string(),
        })?;
        *coord = token.parse().map_err(|_| ObjError::Parse {
            line,
            message: format!("invalid number '{}'", token),
        })?;
    }
    Ok(Vec3::from_array(coords))
}

/// Resolve one `f` token (`i`, `i/t`, `i/t/n` or `i//n`) to a zero-based
/// position index. Negative indices count back from the latest vertex.
fn parse_face_index(token: &str, vertex_count: usize, line: usize) -> ObjResult<u32> {
    let position = token.split('/').next().unwrap_or("");
    let index: i64 = position.parse().map_err(|_| ObjError::Parse {
        line,
        message: format!("invalid face index '{}'", token),
    })?;

    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i - 1),
        i => Some(vertex_count as i64 + i),
    };

    match resolved {
        Some(i) if i >= 0 && (i as usize) < vertex_count => Ok(i as u32),
        _ => Err(ObjError::IndexOutOfRange { line, index }),
    }
}
