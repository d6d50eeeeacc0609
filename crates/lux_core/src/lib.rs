//! Lux Core - Scene model and scene-file loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `View`
//! - **Palette**: packed 24-bit RGB colors and their ordering
//! - **Scene files**: whitespace-separated text parsing and loading
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{load_scene, ColorPolicy};
//!
//! let scene = load_scene("scene.txt", ColorPolicy::Palette)?;
//! println!("Loaded {} spheres", scene.sphere_count());
//! ```

pub mod loader;
pub mod palette;
pub mod parser;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str};
pub use palette::{unpack_rgb, ColorPolicy, Palette};
pub use parser::{SceneDescription, SceneError, SceneParser, SceneResult, SphereSpec};
pub use scene::{Light, Scene, Sphere, View};
