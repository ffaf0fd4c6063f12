//! Surface material definition.

use serde::Deserialize;
use whitted_math::Color;

/// A Phong material with optional mirror and transmission weights.
///
/// Every coefficient is optional: an absent coefficient contributes nothing,
/// which is different from a black one only in that it is never evaluated.
/// The presence of `reflectance` or `transmittance` marks the surface as
/// specular/transmissive and makes the tracer recurse instead of shading.
///
/// Materials are built once with the scene and shared (via `Arc`) by every
/// shape that uses them; they are never mutated while rendering.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Material {
    /// Ambient coefficient (`ka`)
    #[serde(default, alias = "ka")]
    pub ambient: Option<Color>,

    /// Diffuse coefficient (`kd`)
    #[serde(default, alias = "kd")]
    pub diffuse: Option<Color>,

    /// Specular coefficient (`ks`)
    #[serde(default, alias = "ks")]
    pub specular: Option<Color>,

    /// Mirror reflection weight (`kr`)
    #[serde(default, alias = "kr")]
    pub reflectance: Option<Color>,

    /// Refraction weight (`kt`)
    #[serde(default, alias = "kt")]
    pub transmittance: Option<Color>,

    /// Phong specular exponent (`p`)
    #[serde(default = "default_shininess", alias = "p")]
    pub shininess: f32,

    /// Index of refraction, only read when `transmittance` is set
    #[serde(default = "default_ior")]
    pub ior: f32,
}

fn default_shininess() -> f32 {
    20.0
}

fn default_ior() -> f32 {
    1.0
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: None,
            diffuse: None,
            specular: None,
            reflectance: None,
            transmittance: None,
            shininess: default_shininess(),
            ior: default_ior(),
        }
    }
}

impl Material {
    /// A diffuse material whose ambient coefficient matches its diffuse one.
    pub fn diffuse(kd: Color) -> Self {
        Self {
            ambient: Some(kd),
            diffuse: Some(kd),
            ..Default::default()
        }
    }

    /// A perfect mirror tinted by `kr`.
    pub fn mirror(kr: Color) -> Self {
        Self {
            reflectance: Some(kr),
            ..Default::default()
        }
    }

    /// A clear refractive material, with a weak mirror component.
    pub fn glass(ior: f32) -> Self {
        Self {
            reflectance: Some(Color::splat(0.1)),
            transmittance: Some(Color::splat(0.9)),
            ior,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ka: Color) -> Self {
        self.ambient = Some(ka);
        self
    }

    pub fn with_specular(mut self, ks: Color, shininess: f32) -> Self {
        self.specular = Some(ks);
        self.shininess = shininess;
        self
    }

    pub fn with_reflectance(mut self, kr: Color) -> Self {
        self.reflectance = Some(kr);
        self
    }

    pub fn with_transmittance(mut self, kt: Color, ior: f32) -> Self {
        self.transmittance = Some(kt);
        self.ior = ior;
        self
    }

    /// Check if hits on this material spawn reflected or refracted rays.
    pub fn is_recursive(&self) -> bool {
        self.reflectance.is_some() || self.transmittance.is_some()
    }
}
