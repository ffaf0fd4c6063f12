// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod interval;
mod optics;
mod ray;

pub use interval::Interval;
pub use optics::{reflect, refract};
pub use ray::Ray;

/// Color type alias (linear RGB, unclamped).
///
/// Component-wise `*` on two colors is the Hadamard product used for
/// light/material modulation.
pub type Color = Vec3;
