//! The read-only world a render traces against.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use whitted_core::{
    load_obj, LightDescription, LoadError, Material, Mesh, ObjError, SceneDescription,
    ShapeDescription,
};
use whitted_math::{Color, Interval, Ray, Vec3};

use crate::{
    DirectionalLight, HitRecord, Hittable, HittableList, Light, Plane, PointLight, Sphere,
    SpotLight, Triangle,
};

/// Errors that can occur while turning a description into a scene.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to load mesh {path}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: ObjError,
    },
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Shapes, lights and global lighting terms for one render.
///
/// Built once, then only read while tracing.
pub struct Scene {
    world: HittableList,
    lights: Vec<Box<dyn Light>>,
    /// Global ambient light
    pub ambient: Color,
    /// Color returned by rays that hit nothing
    pub background: Color,
    /// Deepest recursion level that may still spawn reflected/refracted rays
    pub max_depth: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with black ambient and background.
    pub fn new() -> Self {
        Self {
            world: HittableList::new(),
            lights: Vec::new(),
            ambient: Color::ZERO,
            background: Color::ZERO,
            max_depth: 5,
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Append a shape. Order matters only for exact ties in hit distance.
    pub fn add(&mut self, shape: impl Into<crate::Shape>) {
        self.world.add(shape);
    }

    pub fn add_light(&mut self, light: impl Light + 'static) {
        self.lights.push(Box::new(light));
    }

    /// Append the triangles of a mesh, smooth-shaded from computed vertex
    /// normals when `smooth` is set. Degenerate faces and faces with
    /// out-of-range indices are dropped. Returns the number of triangles added.
    pub fn add_mesh(&mut self, mut mesh: Mesh, smooth: bool, material: Arc<Material>) -> usize {
        if smooth {
            mesh.compute_normals();
        }

        let mut added = 0;
        let mut skipped = 0;
        for [i0, i1, i2] in mesh.triangles() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            let (Some(&p0), Some(&p1), Some(&p2)) =
                (mesh.positions.get(i0), mesh.positions.get(i1), mesh.positions.get(i2))
            else {
                skipped += 1;
                continue;
            };

            if Triangle::face_normal(p0, p1, p2) == Vec3::ZERO {
                skipped += 1;
                continue;
            }

            let triangle = match (smooth, &mesh.normals) {
                (true, Some(normals)) => Triangle::with_vertex_normals(
                    p0,
                    p1,
                    p2,
                    [normals[i0], normals[i1], normals[i2]],
                    material.clone(),
                ),
                _ => Triangle::new(p0, p1, p2, material.clone()),
            };
            self.world.add(triangle);
            added += 1;
        }

        if skipped > 0 {
            log::warn!("Skipped {} degenerate or invalid triangles", skipped);
        }

        added
    }

    /// Build a scene from a validated description, loading any OBJ meshes.
    pub fn from_description(description: &SceneDescription) -> BuildResult<Self> {
        description.validate()?;

        let mut scene = Scene::new()
            .with_ambient(description.ambient)
            .with_background(description.background)
            .with_max_depth(description.settings.max_depth);

        let materials: HashMap<&str, Arc<Material>> = description
            .materials
            .iter()
            .map(|(name, material)| (name.as_str(), Arc::new(material.clone())))
            .collect();

        for (index, shape) in description.shapes.iter().enumerate() {
            let material = materials
                .get(shape.material())
                .cloned()
                .ok_or_else(|| LoadError::UnknownMaterial {
                    shape: index,
                    name: shape.material().to_string(),
                })?;

            match shape {
                ShapeDescription::Plane { point, normal, .. } => {
                    scene.add(Plane::new(*point, *normal, material));
                }
                ShapeDescription::Sphere { center, radius, .. } => {
                    scene.add(Sphere::new(*center, *radius, material));
                }
                ShapeDescription::Triangle { vertices: [v0, v1, v2], normals, .. } => {
                    let triangle = match normals {
                        Some(normals) => {
                            Triangle::with_vertex_normals(*v0, *v1, *v2, *normals, material)
                        }
                        None => Triangle::new(*v0, *v1, *v2, material),
                    };
                    scene.add(triangle);
                }
                ShapeDescription::Mesh { path, smooth, .. } => {
                    let mesh = load_obj(path).map_err(|source| BuildError::Obj {
                        path: path.clone(),
                        source,
                    })?;
                    let added = scene.add_mesh(mesh, *smooth, material);
                    log::debug!("Added {} triangles from {}", added, path.display());
                }
            }
        }

        for light in &description.lights {
            match *light {
                LightDescription::Point { position, intensity } => {
                    scene.add_light(PointLight::new(position, intensity));
                }
                LightDescription::Directional { direction, intensity } => {
                    scene.add_light(DirectionalLight::new(direction, intensity));
                }
                LightDescription::Spot {
                    position,
                    direction,
                    intensity,
                    cutoff,
                    exponent,
                } => {
                    scene.add_light(SpotLight::new(position, direction, intensity, cutoff, exponent));
                }
            }
        }

        log::info!(
            "Built scene: {} shapes, {} lights, max depth {}",
            scene.shape_count(),
            scene.light_count(),
            scene.max_depth
        );

        Ok(scene)
    }

    /// Nearest hit along `ray`, ignoring anything closer than the
    /// self-intersection epsilon.
    pub fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.world.hit(ray, Interval::from_epsilon())
    }

    pub fn lights(&self) -> impl Iterator<Item = &dyn Light> {
        self.lights.iter().map(|light| light.as_ref())
    }

    /// Get shape count.
    pub fn shape_count(&self) -> usize {
        self.world.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
