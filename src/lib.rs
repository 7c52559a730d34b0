//! Bookmark icon generator
//!
//! Procedurally renders the bookmark manager's PNG icon set: a rounded
//! accent-blue bookmark body with a white page fold on a transparent
//! background, at the 16, 48 and 128 pixel sizes the extension manifest
//! expects.
//!
//! # Features
//!
//! - **Deterministic**: a given size always renders the same pixels
//! - **Self-contained**: pure CPU rasterization, no GPU or system assets
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = bookmark_icons::write_icon_set("icons")?;
//! println!("wrote {} icons", paths.len());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod renderer;

pub use canvas::{Canvas, Rgba};
pub use error::{Error, Result};
pub use geometry::IconGeometry;
pub use renderer::{IconRenderer, IconStyle, ACCENT};

/// Icon sizes the extension manifest references, in ascending pixel order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Renders one icon at `size` with the default brand style.
pub fn render_icon(size: u32) -> Result<Canvas> {
    IconRenderer::new().render(size)
}

/// Renders the full icon set and writes it into `dir` as `icon{size}.png`.
///
/// The directory and any missing parents are created first; existing files
/// are overwritten. Returns the written paths in [`ICON_SIZES`] order. Stops
/// at the first failure, so files rendered before the failing size may
/// already be on disk.
pub fn write_icon_set<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let renderer = IconRenderer::new();
    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let png = renderer.render(size)?.encode_png()?;
        let path = dir.join(format!("icon{size}.png"));
        fs::write(&path, &png)?;
        log::info!("wrote {} ({} bytes)", path.display(), png.len());
        written.push(path);
    }
    Ok(written)
}
