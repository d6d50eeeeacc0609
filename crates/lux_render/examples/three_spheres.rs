//! Simple ray tracer example.
//!
//! Renders a basic scene with spheres and saves to PPM format.

use lux_render::{
    render, write_ppm, Color, Light, RenderSettings, Scene, Sphere, Vec3, View,
};
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = build_scene();
    log::info!("Created {} spheres", scene.sphere_count());

    let settings = RenderSettings::supersampled();
    log::info!(
        "Rendering {}x{} @ {} spp...",
        scene.view.width,
        scene.view.height,
        settings.grid.sample_count()
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &settings)?;
    log::info!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    let mut writer = BufWriter::new(File::create(filename)?);
    write_ppm(&image, &mut writer)?;
    log::info!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let view = View::new(400, 300, 2.0, 1.0);
    let light = Light::new(Vec3::new(-3.0, 4.0, 1.0), 60.0);

    Scene::new(view, light, Color::new(0.05, 0.05, 0.1))
        // Ground
        .with_sphere(Sphere::new(
            Vec3::new(0.0, -101.0, -6.0),
            100.0,
            Color::new(0.5, 0.5, 0.5),
        ))
        // Three main spheres
        .with_sphere(Sphere::new(
            Vec3::new(-2.2, 0.0, -6.0),
            1.0,
            Color::new(0.9, 0.2, 0.1),
        ))
        .with_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -6.0),
            1.0,
            Color::new(0.2, 0.8, 0.3),
        ))
        .with_sphere(Sphere::new(
            Vec3::new(2.2, 0.0, -6.0),
            1.0,
            Color::new(0.2, 0.3, 0.9),
        ))
}
