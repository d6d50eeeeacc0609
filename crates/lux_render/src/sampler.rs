//! Sub-pixel sample placement.

use lux_math::Vec2;

/// An N x N grid of evenly spaced samples inside a pixel.
///
/// A 1 x 1 grid is a single sample through the pixel center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    size: u32,
}

impl SampleGrid {
    /// One ray through the pixel center.
    pub const CENTER: SampleGrid = SampleGrid { size: 1 };

    /// The 3 x 3 grid used for antialiased rendering.
    pub const SUPERSAMPLE: SampleGrid = SampleGrid { size: 3 };

    /// Create a grid with `size` samples per axis (at least 1).
    pub fn new(size: u32) -> Self {
        Self { size: size.max(1) }
    }

    /// Samples per axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total samples per pixel.
    pub fn sample_count(&self) -> u32 {
        self.size * self.size
    }

    /// Sample offsets inside the pixel, row by row from the bottom.
    pub fn offsets(self) -> impl Iterator<Item = Vec2> {
        let n = self.size;
        (0..n).flat_map(move |j| {
            (0..n).map(move |i| {
                Vec2::new(
                    (i as f32 + 0.5) / n as f32,
                    (j as f32 + 0.5) / n as f32,
                )
            })
        })
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::SUPERSAMPLE
    }
}
