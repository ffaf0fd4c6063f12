//! Whitted Renderer - recursive ray tracing.
//!
//! Traces one ray per pixel through a scene of planes, spheres and triangles:
//! Phong shading with shadow rays at diffuse surfaces, mirror reflection and
//! refraction at specular ones, bounded by a maximum recursion depth.

mod camera;
mod chunk;
mod hittable;
mod light;
mod plane;
mod renderer;
mod scene;
mod shading;
mod shape;
mod sphere;
mod trace;
mod triangle;

pub use camera::Camera;
pub use chunk::{generate_chunks, pixel_coordinates, render_chunk, Chunk, ChunkResult, DEFAULT_CHUNK_ROWS};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use light::{DirectionalLight, Light, LightSample, PointLight, SpotLight};
pub use plane::Plane;
pub use renderer::{color_to_rgba, pixel_process, render, render_with_progress, ImageBuffer, GAMMA};
pub use scene::{BuildError, BuildResult, Scene};
pub use shading::shade;
pub use shape::Shape;
pub use sphere::Sphere;
pub use trace::{trace, trace_with_stats, TraceStats};
pub use triangle::Triangle;

/// Re-export common types from the lower crates
pub use whitted_core::{Material, RenderSettings};
pub use whitted_math::{Color, Interval, Ray, Vec3};
