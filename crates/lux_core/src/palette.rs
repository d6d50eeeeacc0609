//! Packed 24-bit RGB palettes.

use lux_math::Color;

use crate::parser::{SceneError, SceneResult};

/// Unpack a `0xRRGGBB` value into a color with channels in [0, 1].
///
/// Bits above the low 24 are ignored.
pub fn unpack_rgb(packed: u32) -> Color {
    let r = ((packed >> 16) & 0xFF) as f32 / 255.0;
    let g = ((packed >> 8) & 0xFF) as f32 / 255.0;
    let b = (packed & 0xFF) as f32 / 255.0;
    Color::new(r, g, b)
}

/// How palette indices in a scene file turn into colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Black background, white spheres. Palette indices are ignored.
    Monochrome,
    /// Sort the palette, then look up background and sphere colors by index.
    #[default]
    Palette,
}

/// An ordered list of packed RGB colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u32>,
}

impl Palette {
    /// Create a palette from packed colors, keeping their order.
    pub fn new(colors: Vec<u32>) -> Self {
        Self { colors }
    }

    /// Create an empty palette with room for `count` colors.
    pub fn with_capacity(count: usize) -> SceneResult<Self> {
        let mut colors = Vec::new();
        colors
            .try_reserve(count)
            .map_err(|source| SceneError::Allocation {
                what: "palette",
                source,
            })?;
        Ok(Self { colors })
    }

    /// Append a packed color.
    pub fn push(&mut self, packed: u32) {
        self.colors.push(packed);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Packed colors in their current order.
    pub fn packed(&self) -> &[u32] {
        &self.colors
    }

    /// Return a copy ordered by the low nibble of every byte, then by value.
    pub fn sorted(&self) -> Palette {
        let mut colors = self.colors.clone();
        colors.sort_by_key(|&c| (c & 0x0F0F_0F0F, c));
        Palette { colors }
    }

    /// Look up the color at `index`.
    pub fn color(&self, index: i32) -> Option<Color> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.colors.get(i))
            .map(|&packed| unpack_rgb(packed))
    }

    /// Look up the color at `index`, failing on out-of-range indices.
    pub fn resolve(&self, index: i32, what: &'static str) -> SceneResult<Color> {
        self.color(index).ok_or(SceneError::ColorIndexOutOfRange {
            what,
            index,
            len: self.len(),
        })
    }
}
