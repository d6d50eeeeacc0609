//! Scene loading from files and strings.

use std::path::Path;

use crate::palette::ColorPolicy;
use crate::parser::{SceneError, SceneParser, SceneResult};
use crate::scene::Scene;

/// Load a scene file and resolve its colors under `policy`.
pub fn load_scene<P: AsRef<Path>>(path: P, policy: ColorPolicy) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_scene_from_str(&content, policy)
}

/// Parse scene text and resolve its colors under `policy`.
pub fn load_scene_from_str(content: &str, policy: ColorPolicy) -> SceneResult<Scene> {
    let description = SceneParser::new(content).parse()?;
    log::debug!(
        "Parsed {} palette color(s), {} sphere(s)",
        description.palette.len(),
        description.spheres.len()
    );

    let scene = description.into_scene(policy)?;
    log::info!(
        "Scene ready: {}x{} image, {} sphere(s), {:?} colors",
        scene.view.width,
        scene.view.height,
        scene.sphere_count(),
        policy
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::Color;

    #[test]
    fn test_load_from_str() {
        let scene = load_scene_from_str(
            "4 2 2.0 1.0\n0 0 0 5\n2 FF00FF 000000\n0\n1\n0 0 -3 1 1\n",
            ColorPolicy::Palette,
        )
        .unwrap();

        assert_eq!(scene.view.width, 4);
        assert_eq!(scene.view.height, 2);
        // Sorted: 0x000000 (key 0) before 0xFF00FF (key 0x0F000F)
        assert_eq!(scene.background, Color::ZERO);
        assert_eq!(scene.spheres()[0].color, Color::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene("does/not/exist.txt", ColorPolicy::Palette).unwrap_err();
        match err {
            SceneError::Io { path, .. } => assert!(path.ends_with("exist.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
