//! Whitted Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Materials**: Phong coefficients plus mirror/transmission weights
//! - **Scene files**: JSON scene descriptions with validation
//! - **Meshes**: triangle meshes loaded from OBJ, with smooth normals
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scenes/cornell.json")?;
//! println!("{} shapes, {} lights", scene.shapes.len(), scene.lights.len());
//! ```

pub mod description;
pub mod material;
pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use description::{
    load_scene, CameraDescription, LightDescription, LoadError, LoadResult, RenderSettings,
    SceneDescription, ShapeDescription, MAX_IMAGE_DIMENSION,
};
pub use material::Material;
pub use mesh::{face_normal, Mesh};
pub use obj::{load_obj, parse_obj, ObjError, ObjResult};
