//! Raster surface implementation.
//!
//! Unlike a browser canvas there is no ambient drawing state: every call
//! receives its fill, font, alignment and clip as arguments, so nothing set
//! by one draw call can leak into the next.

mod drawing;
mod image_ops;
mod text_rendering;

use crate::error::{CanvasError, CanvasResult};
use crate::font_config::{FontConfig, ResolvedFontConfig};
use cosmic_text::{FontSystem, SwashCache};
use tiny_skia::Pixmap;

/// Maximum surface dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// A fixed-size RGBA surface with its own font system.
pub struct CanvasSurface {
    /// Width of the surface in pixels.
    pub(crate) width: u32,
    /// Height of the surface in pixels.
    pub(crate) height: u32,
    /// Pixel buffer (premultiplied RGBA).
    pub(crate) pixmap: Pixmap,
    /// Font system for text shaping.
    pub(crate) font_system: FontSystem,
    /// Swash cache for glyph outlines.
    pub(crate) swash_cache: SwashCache,
}

impl CanvasSurface {
    /// Create a new surface using `FontConfig::default()`.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        Self::with_resolved(width, height, &FontConfig::default().resolve())
    }

    /// Create a new surface using a pre-resolved font configuration.
    ///
    /// This clones the cached font database rather than rescanning fonts.
    pub fn with_resolved(
        width: u32,
        height: u32,
        resolved: &ResolvedFontConfig,
    ) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let font_system =
            FontSystem::new_with_locale_and_db("en".to_string(), resolved.fontdb.clone());

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
        })
    }

    /// Get surface width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get surface height.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::CanvasImage;
    use crate::geometry::{ClipRegion, RectParams};
    use crate::style::FillStyle;

    fn pixel(surface: &CanvasSurface, x: u32, y: u32) -> [u8; 4] {
        let data = surface.get_image_data();
        let idx = ((y * surface.width() + x) * 4) as usize;
        [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = CanvasSurface::new(200, 150).unwrap();
        assert_eq!(surface.width(), 200);
        assert_eq!(surface.height(), 150);
        assert!(surface.pixmap.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            CanvasSurface::new(0, 100),
            Err(CanvasError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            CanvasSurface::new(100, MAX_DIMENSION + 1),
            Err(CanvasError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_fill_rect_pixels() {
        let mut surface = CanvasSurface::new(100, 100).unwrap();
        surface.fill_rect(
            &RectParams::new(10.0, 10.0, 50.0, 50.0),
            &FillStyle::css("#ff0000").unwrap(),
        );

        assert_eq!(pixel(&surface, 30, 30), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 5, 5)[3], 0);
    }

    #[test]
    fn test_clipped_image_does_not_leak() {
        let mut surface = CanvasSurface::new(100, 100).unwrap();
        let image = CanvasImage::from_rgba8(1, 1, vec![0, 0, 255, 255]).unwrap();
        surface.draw_image(
            &image,
            &RectParams::new(0.0, 0.0, 100.0, 100.0),
            Some(&ClipRegion::Circle {
                cx: 50.0,
                cy: 50.0,
                radius: 10.0,
            }),
        );
        assert_eq!(pixel(&surface, 5, 5)[3], 0);

        // The next call is unclipped
        let red = FillStyle::css("#ff0000").unwrap();
        surface.fill_rect(&RectParams::new(0.0, 0.0, 10.0, 10.0), &red);
        assert_eq!(pixel(&surface, 5, 5), [255, 0, 0, 255]);
    }
}
