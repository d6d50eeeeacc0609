//! Scene file parser.
//!
//! The format is a flat stream of whitespace-separated tokens. Line
//! breaks carry no meaning, but line numbers are tracked for errors.
//!
//! ```text
//! <width> <height> <viewport_height> <focal_length>
//! <light_x> <light_y> <light_z> <brightness>
//! <color_count> <hex color>...
//! <background_index>
//! <sphere_count>
//! <x> <y> <z> <radius> <color_index>     (one per sphere)
//! ```

use std::collections::TryReserveError;
use std::path::PathBuf;

use lux_math::{Color, Vec3};
use thiserror::Error;

use crate::palette::{ColorPolicy, Palette};
use crate::scene::{Light, Scene, Sphere, View};

/// Errors that can occur while reading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected end of input while reading {field}")]
    MissingField { field: &'static str },

    #[error("line {line}: invalid {field} '{token}'")]
    InvalidNumber {
        field: &'static str,
        line: usize,
        token: String,
    },

    #[error("line {line}: invalid {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        line: usize,
        reason: String,
    },

    #[error("{what} color index {index} is out of range for a palette of {len} colors")]
    ColorIndexOutOfRange {
        what: &'static str,
        index: i32,
        len: usize,
    },

    #[error("failed to allocate {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere as written in the scene file, before color resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSpec {
    pub center: Vec3,
    pub radius: f32,
    pub color_index: i32,
}

/// Everything a scene file declares, with colors still as palette indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub view: View,
    pub light: Light,
    pub palette: Palette,
    pub background_index: i32,
    pub spheres: Vec<SphereSpec>,
}

impl SceneDescription {
    /// Resolve colors under `policy` and build the renderable scene.
    pub fn into_scene(self, policy: ColorPolicy) -> SceneResult<Scene> {
        let palette = match policy {
            ColorPolicy::Monochrome => None,
            ColorPolicy::Palette => Some(self.palette.sorted()),
        };

        let background = match &palette {
            Some(palette) => palette.resolve(self.background_index, "background")?,
            None => Color::ZERO,
        };

        let mut scene = Scene::new(self.view, self.light, background);
        scene.try_reserve(self.spheres.len())?;

        for spec in &self.spheres {
            let color = match &palette {
                Some(palette) => palette.resolve(spec.color_index, "sphere")?,
                None => Color::ONE,
            };
            scene.add_sphere(Sphere::new(spec.center, spec.radius, color));
        }

        Ok(scene)
    }
}

/// Scene file parser.
pub struct SceneParser<'a> {
    tokens: Vec<(usize, &'a str)>,
    cursor: usize,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        let tokens = content
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)))
            .collect();

        Self { tokens, cursor: 0 }
    }

    /// Parse the whole description.
    ///
    /// Tokens after the last sphere are ignored.
    pub fn parse(&mut self) -> SceneResult<SceneDescription> {
        let width = self.read_dimension("image width")?;
        let height = self.read_dimension("image height")?;
        let viewport_height = self.read_f32("viewport height")?;
        let focal_length = self.read_f32("focal length")?;
        let view = View::new(width, height, viewport_height, focal_length);

        let light_position = self.read_vec3("light position")?;
        let brightness = self.read_f32("light brightness")?;
        let light = Light::new(light_position, brightness);

        let color_count = self.read_count("color count")?;
        let mut palette = Palette::with_capacity(color_count)?;
        for _ in 0..color_count {
            palette.push(self.read_hex("palette color")?);
        }

        let background_index = self.read_i32("background color index")?;

        let sphere_count = self.read_count("sphere count")?;
        let mut spheres = Vec::new();
        spheres
            .try_reserve(sphere_count)
            .map_err(|source| SceneError::Allocation {
                what: "spheres",
                source,
            })?;

        for _ in 0..sphere_count {
            let center = self.read_vec3("sphere center")?;
            let radius = self.read_positive_f32("sphere radius")?;
            let color_index = self.read_i32("sphere color index")?;
            spheres.push(SphereSpec {
                center,
                radius,
                color_index,
            });
        }

        if self.cursor < self.tokens.len() {
            log::debug!(
                "Ignoring {} trailing token(s) after the last sphere",
                self.tokens.len() - self.cursor
            );
        }

        Ok(SceneDescription {
            view,
            light,
            palette,
            background_index,
            spheres,
        })
    }

    fn next_token(&mut self, field: &'static str) -> SceneResult<(usize, &'a str)> {
        let token = self
            .tokens
            .get(self.cursor)
            .copied()
            .ok_or(SceneError::MissingField { field })?;
        self.cursor += 1;
        Ok(token)
    }

    fn read_f32(&mut self, field: &'static str) -> SceneResult<f32> {
        let (line, token) = self.next_token(field)?;
        token.parse().map_err(|_| SceneError::InvalidNumber {
            field,
            line,
            token: token.to_string(),
        })
    }

    fn read_positive_f32(&mut self, field: &'static str) -> SceneResult<f32> {
        let line = self.peek_line();
        let value = self.read_f32(field)?;
        // Written so NaN is rejected too
        if !(value > 0.0) {
            return Err(SceneError::InvalidValue {
                field,
                line,
                reason: format!("expected a positive number, got {value}"),
            });
        }
        Ok(value)
    }

    fn read_vec3(&mut self, field: &'static str) -> SceneResult<Vec3> {
        let x = self.read_f32(field)?;
        let y = self.read_f32(field)?;
        let z = self.read_f32(field)?;
        Ok(Vec3::new(x, y, z))
    }

    fn read_i32(&mut self, field: &'static str) -> SceneResult<i32> {
        let (line, token) = self.next_token(field)?;
        token.parse().map_err(|_| SceneError::InvalidNumber {
            field,
            line,
            token: token.to_string(),
        })
    }

    fn read_count(&mut self, field: &'static str) -> SceneResult<usize> {
        let line = self.peek_line();
        let value = self.read_i32(field)?;
        usize::try_from(value).map_err(|_| SceneError::InvalidValue {
            field,
            line,
            reason: format!("expected a non-negative count, got {value}"),
        })
    }

    fn read_dimension(&mut self, field: &'static str) -> SceneResult<u32> {
        let line = self.peek_line();
        let value = self.read_i32(field)?;
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(SceneError::InvalidValue {
                field,
                line,
                reason: format!("expected a positive size, got {value}"),
            }),
        }
    }

    fn read_hex(&mut self, field: &'static str) -> SceneResult<u32> {
        let (line, token) = self.next_token(field)?;
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        u32::from_str_radix(digits, 16).map_err(|_| SceneError::InvalidNumber {
            field,
            line,
            token: token.to_string(),
        })
    }

    fn peek_line(&self) -> usize {
        self.tokens.get(self.cursor).map_or(0, |&(line, _)| line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SPHERES: &str = "\
640 480
2.0 1.0
0 0 0 10.0
3
0xFF0000 00FF00 0000FF
1
2
0 0 -5 1 0
1.5 0 -4 0.5 2
";

    #[test]
    fn test_parse_description() {
        let desc = SceneParser::new(TWO_SPHERES).parse().unwrap();

        assert_eq!(desc.view, View::new(640, 480, 2.0, 1.0));
        assert_eq!(desc.light, Light::new(Vec3::ZERO, 10.0));
        assert_eq!(desc.palette.packed(), &[0xFF0000, 0x00FF00, 0x0000FF]);
        assert_eq!(desc.background_index, 1);
        assert_eq!(desc.spheres.len(), 2);
        assert_eq!(desc.spheres[1].center, Vec3::new(1.5, 0.0, -4.0));
        assert_eq!(desc.spheres[1].radius, 0.5);
        assert_eq!(desc.spheres[1].color_index, 2);
    }

    #[test]
    fn test_palette_policy_uses_sorted_palette() {
        let scene = SceneParser::new(TWO_SPHERES)
            .parse()
            .unwrap()
            .into_scene(ColorPolicy::Palette)
            .unwrap();

        // Sorted by low nibbles: 0x0000FF (0x00000F), 0x00FF00 (0x000F00), 0xFF0000 (0x0F0000)
        assert_eq!(scene.background, Color::new(0.0, 1.0, 0.0));
        assert_eq!(scene.spheres()[0].color, Color::new(0.0, 0.0, 1.0));
        assert_eq!(scene.spheres()[1].color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_monochrome_policy_ignores_palette() {
        let scene = SceneParser::new(TWO_SPHERES)
            .parse()
            .unwrap()
            .into_scene(ColorPolicy::Monochrome)
            .unwrap();

        assert_eq!(scene.background, Color::ZERO);
        assert!(scene.spheres().iter().all(|s| s.color == Color::ONE));
    }

    #[test]
    fn test_out_of_range_index() {
        let input = "10 10 2 1  0 0 0 1  1 FFFFFF  0  1  0 0 -3 1 4";
        let desc = SceneParser::new(input).parse().unwrap();

        let err = desc.clone().into_scene(ColorPolicy::Palette).unwrap_err();
        assert!(matches!(
            err,
            SceneError::ColorIndexOutOfRange {
                what: "sphere",
                index: 4,
                len: 1
            }
        ));

        // Indices are never looked up without a palette
        assert!(desc.into_scene(ColorPolicy::Monochrome).is_ok());
    }

    #[test]
    fn test_missing_field() {
        let err = SceneParser::new("10 10 2.0").parse().unwrap_err();
        assert!(matches!(
            err,
            SceneError::MissingField {
                field: "focal length"
            }
        ));
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = SceneParser::new("10 10\n2.0 abc").parse().unwrap_err();
        match err {
            SceneError::InvalidNumber { field, line, token } => {
                assert_eq!(field, "focal length");
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_width = SceneParser::new("0 10 2 1").parse().unwrap_err();
        assert!(matches!(zero_width, SceneError::InvalidValue { .. }));

        let negative_count = SceneParser::new("10 10 2 1  0 0 0 1  -1").parse().unwrap_err();
        assert!(matches!(negative_count, SceneError::InvalidValue { .. }));

        let zero_radius = SceneParser::new("10 10 2 1  0 0 0 1  0  0  1  0 0 -3 0 0")
            .parse()
            .unwrap_err();
        assert!(matches!(
            zero_radius,
            SceneError::InvalidValue {
                field: "sphere radius",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_scene() {
        let desc = SceneParser::new("2 1 2 1  0 0 0 1  1 000000  0  0")
            .parse()
            .unwrap();
        let scene = desc.into_scene(ColorPolicy::Palette).unwrap();
        assert_eq!(scene.sphere_count(), 0);
        assert_eq!(scene.background, Color::ZERO);
    }
}
