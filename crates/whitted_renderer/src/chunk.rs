//! Row-chunked rendering.
//!
//! Divides the image into horizontal bands of rows, walked top to bottom, so
//! a caller can show partial results between chunks.

use crate::{trace_with_stats, Camera, Color, Scene, TraceStats};

/// A band of full-width image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// First row of the chunk (row 0 is the top of the image)
    pub y: u32,
    /// Number of rows in the chunk
    pub height: u32,
    /// Index of this chunk in render order
    pub index: usize,
}

impl Chunk {
    pub fn new(y: u32, height: u32, index: usize) -> Self {
        Self { y, height, index }
    }

    /// Get the total number of pixels in this chunk for an image `width` wide.
    pub fn pixel_count(&self, width: u32) -> usize {
        width as usize * self.height as usize
    }
}

/// Default number of rows per chunk.
pub const DEFAULT_CHUNK_ROWS: u32 = 10;

/// Split `image_height` rows into chunks of at most `chunk_rows` rows, top
/// to bottom. The last chunk takes whatever rows remain.
pub fn generate_chunks(image_height: u32, chunk_rows: u32) -> Vec<Chunk> {
    let chunk_rows = chunk_rows.max(1);

    let mut chunks = Vec::new();
    let mut y = 0;
    while y < image_height {
        let height = chunk_rows.min(image_height - y);
        chunks.push(Chunk::new(y, height, chunks.len()));
        y += chunk_rows;
    }

    chunks
}

/// Normalized camera coordinates of pixel `(i, j)`, with `j` counted from
/// the top row: `(i / width, (height - 1 - j) / height)`.
pub fn pixel_coordinates(i: u32, j: u32, width: u32, height: u32) -> (f32, f32) {
    let x = i as f32 / width as f32;
    let y = (height - 1 - j) as f32 / height as f32;
    (x, y)
}

/// Result of rendering a chunk.
#[derive(Debug, Clone)]
pub struct ChunkResult {
    /// The chunk that was rendered
    pub chunk: Chunk,
    /// Linear pixel colors in row-major order
    pub pixels: Vec<Color>,
    /// Rays traced for this chunk
    pub stats: TraceStats,
}

/// Trace one primary ray per pixel of `chunk`.
pub fn render_chunk(
    chunk: &Chunk,
    camera: &Camera,
    scene: &Scene,
    width: u32,
    height: u32,
) -> ChunkResult {
    let mut pixels = Vec::with_capacity(chunk.pixel_count(width));
    let mut stats = TraceStats::default();

    for j in chunk.y..chunk.y + chunk.height {
        for i in 0..width {
            let (x, y) = pixel_coordinates(i, j, width, height);
            let ray = camera.camera_ray(x, y);
            pixels.push(trace_with_stats(&ray, scene, 0, &mut stats));
        }
    }

    ChunkResult {
        chunk: *chunk,
        pixels,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_generate_chunks_exact_fit() {
        let chunks = generate_chunks(40, 10);
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.height == 10));
    }

    #[test]
    fn test_generate_chunks_partial_fit() {
        let chunks = generate_chunks(25, 10);
        assert_eq!(chunks.len(), 3);

        // Top to bottom, covering every row once
        let rows: u32 = chunks.iter().map(|c| c.height).sum();
        assert_eq!(rows, 25);
        assert_eq!(chunks[0].y, 0);
        assert_eq!(chunks[2], Chunk::new(20, 5, 2));
    }

    #[test]
    fn test_generate_chunks_zero_rows_per_chunk() {
        let chunks = generate_chunks(3, 0);
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_pixel_count_wide_chunk() {
        let chunk = Chunk::new(0, 70_000, 0);
        assert_eq!(chunk.pixel_count(70_000), 4_900_000_000);
        assert_eq!(Chunk::new(2, 3, 0).pixel_count(8), 24);
    }

    #[test]
    fn test_pixel_coordinates() {
        // Top-left pixel maps to the top of the image plane
        assert_eq!(pixel_coordinates(0, 0, 4, 4), (0.0, 0.75));
        // Bottom row maps to y = 0
        assert_eq!(pixel_coordinates(2, 3, 4, 4), (0.5, 0.0));
    }

    #[test]
    fn test_render_chunk() {
        let scene = Scene::new().with_background(Color::new(0.5, 0.5, 0.5));
        let camera = Camera::new(Vec3::ZERO, -Vec3::Z, Vec3::Y, 60.0, 1.0);

        let chunk = Chunk::new(2, 3, 0);
        let result = render_chunk(&chunk, &camera, &scene, 8, 8);

        assert_eq!(result.pixels.len(), 24);
        assert!(result.pixels.iter().all(|&c| c == Color::splat(0.5)));
        assert_eq!(result.stats.rays, 24);
        assert_eq!(result.stats.deepest, 0);
    }
}
