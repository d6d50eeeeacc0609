//! Vector-arithmetic trace of a loaded scene.
//!
//! Prints the basic vector operations applied to the scene globals and to
//! every sphere, one result per line, instead of rendering an image.

use lux_core::Scene;
use lux_math::Vec3Ext;

/// Build the trace report for `scene`.
pub fn trace_report(scene: &Scene) -> String {
    let background = scene.background;
    let light = scene.light.position;
    let view = &scene.view;
    let viewport_width = (view.viewport_height * view.width as f32) / view.height as f32;

    let mut lines = vec![
        format!(
            "{} + {} = {}",
            background.fmt_tuple(),
            light.fmt_tuple(),
            (background + light).fmt_tuple()
        ),
        format!(
            "{} - {} = {}",
            background.fmt_tuple(),
            light.fmt_tuple(),
            (background - light).fmt_tuple()
        ),
        format!(
            "{:.1} * {} = {}",
            viewport_width,
            light.fmt_tuple(),
            (viewport_width * light).fmt_tuple()
        ),
        format!(
            "normalize{} = {}",
            light.fmt_tuple(),
            light.normalize_or_zero().fmt_tuple()
        ),
    ];

    for sphere in scene.spheres() {
        lines.push(String::new());
        lines.push(format!(
            "{} / {:.1} = {}",
            sphere.color.fmt_tuple(),
            sphere.radius,
            sphere.color.div_or_zero(sphere.radius).fmt_tuple()
        ));
        lines.push(format!(
            "dot({}, {}) = {:.1}",
            light.fmt_tuple(),
            sphere.center.fmt_tuple(),
            light.dot(sphere.center)
        ));
        lines.push(format!(
            "distance({}, {}) = {:.1}",
            light.fmt_tuple(),
            sphere.center.fmt_tuple(),
            light.distance(sphere.center)
        ));
        lines.push(format!(
            "length{} = {:.1}",
            sphere.center.fmt_tuple(),
            sphere.center.length()
        ));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
