//! Lux Renderer - CPU sphere ray tracing
//!
//! A direct-lighting ray tracer for scenes of flat-colored spheres lit by
//! one point light: nearest-hit intersection, Lambertian shading, hard
//! shadows and optional box-filtered supersampling.

mod camera;
mod diagnostics;
mod error;
mod hittable;
mod mode;
mod output;
mod renderer;
mod sampler;
mod shading;
mod strategy;

pub use camera::PinholeCamera;
pub use diagnostics::trace_report;
pub use error::{RenderError, RenderResult};
pub use hittable::{nearest_hit, occluded, Hit, Hittable, MAX_DISTANCE};
pub use mode::RenderMode;
pub use output::{color_to_rgb, write_png, write_ppm, OutputFormat};
pub use renderer::{render, render_pixel, trace, ImageBuffer, RenderSettings};
pub use sampler::SampleGrid;
pub use shading::{light_intensity, shade, Tint, SHADOW_ATTENUATION, SHADOW_BIAS};
pub use strategy::{DiagnosticReport, Frame, RenderStrategy, SingleSampleRender, SupersampledRender};

/// Re-export scene and math types used in the public API
pub use lux_core::{ColorPolicy, Light, Scene, Sphere, View};
pub use lux_math::{Color, Ray, Vec2, Vec3};
