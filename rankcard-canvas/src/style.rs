//! Style types passed explicitly to each draw call.

use crate::error::{CanvasError, CanvasResult};
use crate::gradient::LinearGradient;

/// Fill style for a single draw call.
#[derive(Debug, Clone)]
pub enum FillStyle {
    /// Solid color fill.
    Color(tiny_skia::Color),
    /// Linear gradient fill.
    LinearGradient(LinearGradient),
}

impl FillStyle {
    /// Solid fill from a CSS color string (`#rgb`, `#rrggbbaa`, `rgb(...)`, names).
    pub fn css(color: &str) -> CanvasResult<Self> {
        Ok(FillStyle::Color(parse_color(color)?))
    }

    pub(crate) fn to_paint(&self) -> Option<tiny_skia::Paint<'static>> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        match self {
            FillStyle::Color(color) => paint.set_color(*color),
            FillStyle::LinearGradient(gradient) => paint.shader = gradient.to_shader()?,
        }
        Some(paint)
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        // Default is opaque black
        FillStyle::Color(tiny_skia::Color::BLACK)
    }
}

/// Parse a CSS color string into a tiny_skia::Color.
pub fn parse_color(s: &str) -> CanvasResult<tiny_skia::Color> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| CanvasError::ColorParseError(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_array();
    Ok(tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::BLACK))
}

/// Horizontal text alignment relative to the anchor x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text ends at the anchor.
    End,
}

impl TextAlign {
    /// X offset from the anchor for a run of the given width.
    pub fn x_offset(self, width: f32) -> f32 {
        match self {
            TextAlign::Start => 0.0,
            TextAlign::End => -width,
        }
    }
}

/// Font weight used for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl From<FontWeight> for cosmic_text::Weight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Regular => cosmic_text::Weight::NORMAL,
            FontWeight::Bold => cosmic_text::Weight::BOLD,
        }
    }
}

/// Font selection for measuring or drawing a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Preferred family. Falls back to the generic sans-serif family when missing.
    pub family: String,
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size_px: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, weight: FontWeight, size_px: f32) -> Self {
        Self {
            family: family.into(),
            weight,
            size_px,
        }
    }
}

/// Everything needed to draw a text run besides its content and anchor.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font: FontSpec,
    pub fill: FillStyle,
    pub align: TextAlign,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_alpha() {
        let color = parse_color("#ffffff66").unwrap();
        assert_eq!(color.red(), 1.0);
        assert!((color.alpha() - 0x66 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_short_hex() {
        let color = parse_color("#f00").unwrap();
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 0.0);
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(matches!(
            parse_color("not-a-color"),
            Err(CanvasError::ColorParseError(_))
        ));
    }

    #[test]
    fn test_text_align_offsets() {
        assert_eq!(TextAlign::Start.x_offset(40.0), 0.0);
        assert_eq!(TextAlign::End.x_offset(40.0), -40.0);
    }
}
