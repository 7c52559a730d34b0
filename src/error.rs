//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// A requested size would produce a degenerate icon (zero-area body)
    #[error("invalid icon size {0}: derived body dimensions are not positive")]
    InvalidSize(u32),

    /// The rasterizer refused to allocate a pixel buffer
    #[error("canvas allocation failed: {0}")]
    Canvas(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Directory creation or file write failed
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
