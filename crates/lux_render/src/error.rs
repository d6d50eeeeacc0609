use thiserror::Error;

/// Errors raised while rendering or encoding a frame.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot allocate a {width}x{height} image buffer")]
    Allocation { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
