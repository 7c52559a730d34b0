//! Icon compositing.
//!
//! [`IconRenderer`] turns a pixel size into a finished canvas: a rounded
//! bookmark body in the accent color with a white page-fold notch on top,
//! over a fully transparent background.

use crate::canvas::{Canvas, Rgba};
use crate::error::Result;
use crate::geometry::IconGeometry;

/// Brand accent blue (`#1a73e8`) used for the bookmark body.
pub const ACCENT: Rgba = Rgba::rgb(0x1a, 0x73, 0xe8);

/// Fill colors for the two icon shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    /// Rounded body fill.
    pub body: Rgba,
    /// Fold notch fill.
    pub fold: Rgba,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            body: ACCENT,
            fold: Rgba::WHITE,
        }
    }
}

/// Renders bookmark icons at any supported size.
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    style: IconStyle,
}

impl IconRenderer {
    /// Renderer with the default brand style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a custom fill style.
    pub fn with_style(style: IconStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Renders one icon onto a fresh transparent canvas.
    pub fn render(&self, size: u32) -> Result<Canvas> {
        let geom = IconGeometry::for_size(size)?;
        let mut canvas = Canvas::new(size)?;

        log::debug!(
            "rendering {size}px icon: body {}x{} at inset {}, corner radius {}",
            geom.body_width,
            geom.body_height,
            geom.padding,
            geom.corner_radius
        );

        canvas.fill_rounded_rect(
            geom.padding as f32,
            geom.padding as f32,
            geom.body_width as f32,
            geom.body_height as f32,
            geom.corner_radius as f32,
            self.style.body,
        );
        canvas.fill_polygon(&geom.fold, self.style.fold);

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn render_is_deterministic() {
        let renderer = IconRenderer::new();
        let a = renderer.render(48).unwrap();
        let b = renderer.render(48).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn default_style_paints_accent_body_and_white_fold() {
        let canvas = IconRenderer::new().render(128).unwrap();

        // Body interior, left of the fold.
        assert_eq!(canvas.pixel(24, 64), Some(ACCENT));
        // Fold interior, below the top padding line.
        assert_eq!(canvas.pixel(64, 24), Some(Rgba::WHITE));
        // All four canvas corners stay transparent.
        for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127)] {
            assert_eq!(canvas.pixel(x, y), Some(Rgba::TRANSPARENT));
        }
    }

    #[test]
    fn smallest_size_still_has_both_shapes() {
        let canvas = IconRenderer::new().render(16).unwrap();
        assert_eq!(canvas.pixel(8, 4), Some(Rgba::WHITE));
        assert_eq!(canvas.pixel(8, 13), Some(ACCENT));
        assert_eq!(canvas.pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn custom_style_is_used_verbatim() {
        let style = IconStyle {
            body: Rgba::rgb(200, 30, 30),
            fold: Rgba::rgb(10, 10, 10),
        };
        let renderer = IconRenderer::with_style(style.clone());
        assert_eq!(renderer.style(), &style);

        let canvas = renderer.render(128).unwrap();
        assert_eq!(canvas.pixel(24, 64), Some(style.body));
        assert_eq!(canvas.pixel(64, 24), Some(style.fold));
    }

    #[test]
    fn degenerate_size_is_rejected() {
        assert!(matches!(
            IconRenderer::new().render(0),
            Err(Error::InvalidSize(0))
        ));
    }
}
