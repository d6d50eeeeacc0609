use crate::strategy::{DiagnosticReport, RenderStrategy, SingleSampleRender, SupersampledRender};

/// Run mode, chosen at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Vector-arithmetic trace instead of an image
    Diagnostic,
    /// Single sample per pixel, white spheres
    Simple,
    /// 3 x 3 supersampling with palette colors
    #[default]
    Colored,
}

impl RenderMode {
    /// The strategy implementing this mode.
    pub fn strategy(self) -> Box<dyn RenderStrategy> {
        log::info!("Render mode: {:?}", self);
        match self {
            RenderMode::Diagnostic => Box::new(DiagnosticReport),
            RenderMode::Simple => Box::new(SingleSampleRender::default()),
            RenderMode::Colored => Box::new(SupersampledRender::default()),
        }
    }
}
