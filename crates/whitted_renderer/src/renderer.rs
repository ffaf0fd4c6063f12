//! Image-level rendering and the output pixel pipeline.
//!
//! Walks the image chunk by chunk, one primary ray per pixel:
//! - Linear colors are kept in an [`ImageBuffer`]
//! - Exposure, clamping and gamma are applied only on output

use std::path::Path;
use std::time::Instant;

use whitted_core::RenderSettings;

use crate::{generate_chunks, render_chunk, Camera, ChunkResult, Color, Scene, TraceStats};

/// Display gamma applied when converting to 8-bit.
pub const GAMMA: f32 = 2.2;

/// Apply exposure, clamp to `[0, 1]`, gamma-correct and quantize one channel.
#[inline]
pub fn pixel_process(value: f32, exposure: f32) -> u8 {
    let value = (value * exposure).clamp(0.0, 1.0);
    (value.powf(1.0 / GAMMA) * 255.0).round() as u8
}

/// Convert a linear color to 8-bit RGBA with opaque alpha.
pub fn color_to_rgba(color: Color, exposure: f32) -> [u8; 4] {
    [
        pixel_process(color.x, exposure),
        pixel_process(color.y, exposure),
        pixel_process(color.z, exposure),
        255,
    ]
}

/// Linear-color framebuffer, row 0 at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a finished chunk into place.
    pub fn write_chunk(&mut self, result: &ChunkResult) {
        let start = self.index(0, result.chunk.y);
        self.pixels[start..start + result.pixels.len()].copy_from_slice(&result.pixels);
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self, exposure: f32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color, exposure));
        }
        bytes
    }

    /// Write the image as an 8-bit RGBA PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P, exposure: f32) -> image::ImageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgba(exposure),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
    }
}

/// Render the entire scene to an image buffer.
pub fn render(camera: &Camera, scene: &Scene, settings: &RenderSettings) -> ImageBuffer {
    render_with_progress(camera, scene, settings, |_, _| {})
}

/// Render the scene, calling `progress` after each chunk with that chunk's
/// result and the partially filled image.
pub fn render_with_progress<F>(
    camera: &Camera,
    scene: &Scene,
    settings: &RenderSettings,
    mut progress: F,
) -> ImageBuffer
where
    F: FnMut(&ChunkResult, &ImageBuffer),
{
    let (width, height) = (settings.width, settings.height);
    let mut image = ImageBuffer::new(width, height);
    let chunks = generate_chunks(height, settings.chunk_rows);

    log::info!(
        "Rendering {}x{} in {} chunks of {} rows",
        width,
        height,
        chunks.len(),
        settings.chunk_rows
    );

    let start = Instant::now();
    let mut stats = TraceStats::default();

    for chunk in &chunks {
        let result = render_chunk(chunk, camera, scene, width, height);
        stats.merge(&result.stats);
        image.write_chunk(&result);

        log::debug!(
            "Chunk {}/{} (rows {}..{}): {} rays",
            chunk.index + 1,
            chunks.len(),
            chunk.y,
            chunk.y + chunk.height,
            result.stats.rays
        );
        progress(&result, &image);
    }

    log::info!(
        "Rendered in {:.2?}: {} rays, deepest recursion {}",
        start.elapsed(),
        stats.rays,
        stats.deepest
    );

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, PointLight, Sphere, Vec3};
    use std::sync::Arc;

    #[test]
    fn test_pixel_process() {
        assert_eq!(pixel_process(0.0, 1.0), 0);
        assert_eq!(pixel_process(1.0, 1.0), 255);
        // Clamped above and below
        assert_eq!(pixel_process(7.5, 1.0), 255);
        assert_eq!(pixel_process(-0.5, 1.0), 0);
        // Exposure scales before clamping
        assert_eq!(pixel_process(0.5, 2.0), 255);
        // Mid grey is lifted by gamma
        let expected = (0.5_f32.powf(1.0 / 2.2) * 255.0).round() as u8;
        assert_eq!(pixel_process(0.5, 1.0), expected);
        assert!(expected > 128);
    }

    #[test]
    fn test_color_to_rgba_alpha() {
        assert_eq!(color_to_rgba(Color::new(1.0, 0.0, 2.0), 1.0), [255, 0, 255, 255]);
    }

    #[test]
    fn test_image_buffer_write_chunk() {
        let mut image = ImageBuffer::new(2, 3);
        let result = ChunkResult {
            chunk: crate::Chunk::new(1, 2, 0),
            pixels: vec![Color::ONE; 4],
            stats: TraceStats::default(),
        };
        image.write_chunk(&result);

        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.get(1, 1), Color::ONE);
        assert_eq!(image.get(0, 2), Color::ONE);
        assert_eq!(image.to_rgba(1.0).len(), 2 * 3 * 4);
    }

    #[test]
    fn test_pixel_index_past_u32() {
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 4_899_999_999);
        assert_eq!(image.index(5, 1), 70_005);
    }

    #[test]
    fn test_render_with_progress() {
        let mut scene = Scene::new().with_background(Color::new(0.0, 0.0, 0.25));
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(Material::diffuse(Color::new(1.0, 0.0, 0.0))),
        ));
        scene.add_light(PointLight::new(Vec3::ZERO, Color::ONE));

        let settings = RenderSettings {
            width: 9,
            height: 9,
            chunk_rows: 4,
            ..Default::default()
        };
        let camera = Camera::new(Vec3::ZERO, -Vec3::Z, Vec3::Y, 30.0, settings.aspect_ratio());

        let mut seen = Vec::new();
        let image = render_with_progress(&camera, &scene, &settings, |result, _| {
            seen.push(result.chunk.index);
        });
        assert_eq!(seen, vec![0, 1, 2]);

        // Center pixel sees the sphere, the corner sees background
        assert!(image.get(4, 4).x > 0.5);
        assert_eq!(image.get(0, 0), Color::new(0.0, 0.0, 0.25));
    }
}
