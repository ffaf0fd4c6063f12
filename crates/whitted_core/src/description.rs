//! JSON scene descriptions.
//!
//! A scene file names its materials once and refers to them by name from
//! shapes. Mesh paths are resolved relative to the scene file. Everything is
//! validated here, at load time, so the renderer can assume well-formed input.
//!
//! ```json
//! {
//!   "settings": { "width": 640, "height": 480, "max_depth": 5 },
//!   "camera": { "eye": [0, 0, 0], "target": [0, 0, -1], "fov": 45 },
//!   "ambient": [0.1, 0.1, 0.1],
//!   "materials": { "red": { "kd": [0.8, 0.1, 0.1] } },
//!   "shapes": [ { "type": "sphere", "center": [0, 0, -5], "radius": 1, "material": "red" } ],
//!   "lights": [ { "type": "point", "position": [0, 5, 0], "intensity": [1, 1, 1] } ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use whitted_math::{Color, Vec3};

use crate::material::Material;
use crate::mesh::face_normal;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape {shape} references unknown material '{name}'")]
    UnknownMaterial { shape: usize, name: String },

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Largest accepted image width or height in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

/// Image and recursion settings for one render.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum reflection/refraction recursion depth
    pub max_depth: u32,
    /// Linear multiplier applied before clamping and gamma
    pub exposure: f32,
    /// Image rows traced per render chunk
    pub chunk_rows: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 5,
            exposure: 1.0,
            chunk_rows: 10,
        }
    }
}

impl RenderSettings {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Pinhole camera placement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    pub eye: Vec3,
    pub target: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    /// Vertical field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f32,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_fov() -> f32 {
    45.0
}

/// A shape entry. Every variant names its material.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Plane {
        point: Vec3,
        normal: Vec3,
        material: String,
    },
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Triangle {
        vertices: [Vec3; 3],
        #[serde(default)]
        normals: Option<[Vec3; 3]>,
        material: String,
    },
    /// Triangles loaded from an OBJ file
    Mesh {
        path: PathBuf,
        #[serde(default)]
        smooth: bool,
        material: String,
    },
}

impl ShapeDescription {
    /// Name of the material this shape uses.
    pub fn material(&self) -> &str {
        match self {
            ShapeDescription::Plane { material, .. }
            | ShapeDescription::Sphere { material, .. }
            | ShapeDescription::Triangle { material, .. }
            | ShapeDescription::Mesh { material, .. } => material,
        }
    }
}

/// A light entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDescription {
    Point {
        position: Vec3,
        intensity: Color,
    },
    /// `direction` is the direction the light travels
    Directional {
        direction: Vec3,
        intensity: Color,
    },
    Spot {
        position: Vec3,
        direction: Vec3,
        intensity: Color,
        /// Cone half-angle in degrees
        cutoff: f32,
        #[serde(default = "default_spot_exponent")]
        exponent: f32,
    },
}

fn default_spot_exponent() -> f32 {
    1.0
}

/// A complete scene as read from a file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub settings: RenderSettings,

    pub camera: CameraDescription,

    /// Global ambient light
    #[serde(default)]
    pub ambient: Color,

    /// Color returned by rays that hit nothing
    #[serde(default)]
    pub background: Color,

    #[serde(default)]
    pub materials: BTreeMap<String, Material>,

    #[serde(default)]
    pub shapes: Vec<ShapeDescription>,

    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Parse and validate a scene from JSON text.
    pub fn from_json(source: &str) -> LoadResult<Self> {
        let description: SceneDescription = serde_json::from_str(source)?;
        description.validate()?;
        Ok(description)
    }

    /// Check the preconditions the renderer relies on.
    pub fn validate(&self) -> LoadResult<()> {
        let settings = &self.settings;
        if settings.width == 0 || settings.height == 0 {
            return invalid(format!(
                "image size must be non-zero, got {}x{}",
                settings.width, settings.height
            ));
        }
        if settings.width > MAX_IMAGE_DIMENSION || settings.height > MAX_IMAGE_DIMENSION {
            return invalid(format!(
                "image size {}x{} exceeds the {} pixel limit per side",
                settings.width, settings.height, MAX_IMAGE_DIMENSION
            ));
        }
        if settings.chunk_rows == 0 {
            return invalid("chunk_rows must be at least 1");
        }
        if !settings.exposure.is_finite() || settings.exposure < 0.0 {
            return invalid(format!("exposure must be non-negative, got {}", settings.exposure));
        }

        let camera = &self.camera;
        if (camera.target - camera.eye).length_squared() == 0.0 {
            return invalid("camera eye and target coincide");
        }
        if camera.up.cross(camera.target - camera.eye).length_squared() == 0.0 {
            return invalid("camera up vector is parallel to the view direction");
        }
        if !(camera.fov > 0.0 && camera.fov < 180.0) {
            return invalid(format!("camera fov must be in (0, 180), got {}", camera.fov));
        }

        for (name, material) in &self.materials {
            if material.transmittance.is_some() && !(material.ior > 0.0) {
                return invalid(format!("material '{}' has non-positive ior", name));
            }
        }

        for (index, shape) in self.shapes.iter().enumerate() {
            if !self.materials.contains_key(shape.material()) {
                return Err(LoadError::UnknownMaterial {
                    shape: index,
                    name: shape.material().to_string(),
                });
            }

            match shape {
                ShapeDescription::Plane { normal, .. } if normal.length_squared() == 0.0 => {
                    return invalid(format!("plane {} has a zero-length normal", index));
                }
                ShapeDescription::Sphere { radius, .. } if !(*radius > 0.0) => {
                    return invalid(format!("sphere {} has non-positive radius {}", index, radius));
                }
                ShapeDescription::Triangle { vertices: [a, b, c], .. }
                    if face_normal(*a, *b, *c).is_none() =>
                {
                    return invalid(format!("triangle {} has collinear vertices", index));
                }
                _ => {}
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            match light {
                LightDescription::Directional { direction, .. }
                | LightDescription::Spot { direction, .. }
                    if direction.length_squared() == 0.0 =>
                {
                    return invalid(format!("light {} has a zero-length direction", index));
                }
                LightDescription::Spot { cutoff, .. } if !(*cutoff > 0.0 && *cutoff <= 90.0) => {
                    return invalid(format!("spot light {} cutoff must be in (0, 90]", index));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Rewrite relative mesh paths as paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for shape in &mut self.shapes {
            if let ShapeDescription::Mesh { path, .. } = shape {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }
}

fn invalid<T>(message: impl Into<String>) -> LoadResult<T> {
    Err(LoadError::Invalid(message.into()))
}

/// Load a scene file and resolve its mesh paths against the file's directory.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let mut description = SceneDescription::from_json(&source)?;

    if let Some(dir) = path.parent() {
        description.resolve_paths(dir);
    }

    log::info!(
        "Loaded scene {}: {} materials, {} shapes, {} lights",
        path.display(),
        description.materials.len(),
        description.shapes.len(),
        description.lights.len()
    );

    Ok(description)
}
