//! Derived icon geometry.
//!
//! Everything drawn on an icon canvas is a pure function of the requested
//! pixel size: an inset rounded rectangle (the bookmark body) and a five-point
//! fold notch. The derivation is kept bit-reproducible — integer math for the
//! body box and radius, binary-exact fractions for the fold vertices — so the
//! rasterizer is the only source of rounding.

use crate::error::{Error, Result};

/// Body height as a fraction of the canvas side (7/8, binary-exact).
const BODY_HEIGHT_RATIO: f64 = 0.875;

// Fold vertex fractions of the canvas side. All are multiples of 1/32 and
// therefore exact in f32.
const FOLD_LEFT: f32 = 0.34375;
const FOLD_RIGHT: f32 = 0.65625;
const FOLD_BOTTOM: f32 = 0.6875;
const FOLD_NOTCH_Y: f32 = 0.53125;

/// Pixel geometry of one icon, derived from its side length.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGeometry {
    /// Canvas side length in pixels.
    pub size: u32,
    /// Inset of the body box from the left and top edges (`size / 8`).
    pub padding: u32,
    /// Body box width (`size - 2 * padding`).
    pub body_width: u32,
    /// Body box height (`floor(size * 0.875)`).
    pub body_height: u32,
    /// Uniform corner radius of the body box (`size / 16`).
    pub corner_radius: u32,
    /// Fold vertices: top-left, top-right, right leg tip, center notch,
    /// left leg tip. Passed to the rasterizer as-is.
    pub fold: [(f32, f32); 5],
}

impl IconGeometry {
    /// Derives the geometry for a square canvas of side `size`.
    ///
    /// Rejects sizes whose body box would have a non-positive width or
    /// height. Anything from 2 px upward is accepted; the fixed icon sizes
    /// can never fail here.
    pub fn for_size(size: u32) -> Result<Self> {
        let padding = size / 8;
        let body_width = size.saturating_sub(2 * padding);
        let body_height = (f64::from(size) * BODY_HEIGHT_RATIO).floor() as u32;

        if size == 0 || body_width == 0 || body_height == 0 {
            return Err(Error::InvalidSize(size));
        }

        let s = size as f32;
        let top = padding as f32;
        let fold = [
            (s * FOLD_LEFT, top),
            (s * FOLD_RIGHT, top),
            (s * FOLD_RIGHT, s * FOLD_BOTTOM),
            (s * 0.5, s * FOLD_NOTCH_Y),
            (s * FOLD_LEFT, s * FOLD_BOTTOM),
        ];

        Ok(Self {
            size,
            padding,
            body_width,
            body_height,
            corner_radius: size / 16,
            fold,
        })
    }
}
