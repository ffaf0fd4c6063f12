//! Light sources.
//!
//! The tracer only sees the [`Light`] trait: given a surface point, a light
//! either reports where it is and how bright it arrives, or that it does not
//! contribute at all.

use whitted_math::{Color, Vec3};

/// Distance at which directional lights are placed for shadow tests.
const DIRECTIONAL_LIGHT_DISTANCE: f32 = 1.0e6;

/// What one light contributes at one surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Unit direction from the surface point toward the light
    pub direction: Vec3,
    /// Light position, used to bound shadow rays
    pub position: Vec3,
    /// Arriving intensity
    pub intensity: Color,
}

impl LightSample {
    /// Distance from `point` to the light.
    pub fn distance_from(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

/// Trait for light sources.
pub trait Light: Send + Sync {
    /// Sample the light at a surface point, `None` if it does not reach it.
    fn sample(&self, point: Vec3) -> Option<LightSample>;
}

/// Omnidirectional light at a point, without falloff.
#[derive(Debug, Clone)]
pub struct PointLight {
    position: Vec3,
    intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Light for PointLight {
    fn sample(&self, point: Vec3) -> Option<LightSample> {
        let direction = (self.position - point).try_normalize()?;
        Some(LightSample {
            direction,
            position: self.position,
            intensity: self.intensity,
        })
    }
}

/// Light arriving from infinitely far away along one direction.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Direction the light travels (unit length)
    direction: Vec3,
    intensity: Color,
}

impl DirectionalLight {
    /// Create a directional light. `direction` is the direction of travel.
    pub fn new(direction: Vec3, intensity: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            intensity,
        }
    }
}

impl Light for DirectionalLight {
    fn sample(&self, point: Vec3) -> Option<LightSample> {
        let direction = (-self.direction).try_normalize()?;
        Some(LightSample {
            direction,
            position: point + direction * DIRECTIONAL_LIGHT_DISTANCE,
            intensity: self.intensity,
        })
    }
}

/// Cone-shaped light with angular falloff.
#[derive(Debug, Clone)]
pub struct SpotLight {
    position: Vec3,
    /// Cone axis (unit length)
    direction: Vec3,
    intensity: Color,
    /// Cosine of the cone half-angle
    cos_cutoff: f32,
    /// Falloff exponent applied to the cosine of the angle off-axis
    exponent: f32,
}

impl SpotLight {
    /// Create a spot light. `cutoff` is the cone half-angle in degrees.
    pub fn new(position: Vec3, direction: Vec3, intensity: Color, cutoff: f32, exponent: f32) -> Self {
        Self {
            position,
            direction: direction.normalize_or_zero(),
            intensity,
            cos_cutoff: cutoff.to_radians().cos(),
            exponent,
        }
    }
}

impl Light for SpotLight {
    fn sample(&self, point: Vec3) -> Option<LightSample> {
        let direction = (self.position - point).try_normalize()?;

        let cos_angle = (-direction).dot(self.direction);
        if cos_angle < self.cos_cutoff {
            return None;
        }

        Some(LightSample {
            direction,
            position: self.position,
            intensity: self.intensity * cos_angle.powf(self.exponent),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_sample() {
        let light = PointLight::new(Vec3::new(0.0, 4.0, 0.0), Color::ONE);
        let sample = light.sample(Vec3::ZERO).unwrap();

        assert_eq!(sample.direction, Vec3::Y);
        assert_eq!(sample.intensity, Color::ONE);
        assert!((sample.distance_from(Vec3::ZERO) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_light_at_surface_point() {
        let light = PointLight::new(Vec3::ONE, Color::ONE);
        assert!(light.sample(Vec3::ONE).is_none());
    }

    #[test]
    fn test_directional_light_sample() {
        let light = DirectionalLight::new(Vec3::new(0.0, -2.0, 0.0), Color::splat(0.5));
        let point = Vec3::new(3.0, 1.0, -2.0);
        let sample = light.sample(point).unwrap();

        assert_eq!(sample.direction, Vec3::Y);
        assert_eq!(sample.intensity, Color::splat(0.5));
        // Far enough that any scene geometry is closer
        assert!(sample.distance_from(point) > 1.0e5);
    }

    #[test]
    fn test_spot_light_cone() {
        let light = SpotLight::new(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, Color::ONE, 30.0, 2.0);

        // Straight below: full intensity
        let below = light.sample(Vec3::ZERO).unwrap();
        assert!((below.intensity - Color::ONE).length() < 1e-6);

        // 20 degrees off-axis: inside, attenuated by cos^2
        let off = 10.0 * 20.0_f32.to_radians().tan();
        let inside = light.sample(Vec3::new(off, 0.0, 0.0)).unwrap();
        let expected = 20.0_f32.to_radians().cos().powi(2);
        assert!((inside.intensity.x - expected).abs() < 1e-5);

        // 45 degrees off-axis: outside the cone
        assert!(light.sample(Vec3::new(10.0, 0.0, 0.0)).is_none());
    }
}
