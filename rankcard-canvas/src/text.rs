//! Text shaping and measurement using cosmic-text.

use crate::font_config::has_family;
use crate::style::FontSpec;
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping};

/// Text metrics for a single shaped run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text in pixels.
    pub width: f32,
}

/// Pick the requested family when it is installed, otherwise sans-serif.
pub(crate) fn resolve_family<'a>(font_system: &FontSystem, family: &'a str) -> Family<'a> {
    match family {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        name if has_family(font_system.db(), name) => Family::Name(name),
        _ => Family::SansSerif,
    }
}

/// Shape a single line of text and return the laid-out buffer with its metrics.
pub(crate) fn shape_text(
    font_system: &mut FontSystem,
    text: &str,
    font: &FontSpec,
) -> (Buffer, TextMetrics) {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    let family = resolve_family(font_system, &font.family);
    // Hinting off so measured advances match drawn outlines
    let attrs = Attrs::new()
        .family(family)
        .weight(font.weight.into())
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let width = buffer
        .layout_runs()
        .map(|run| run.line_w)
        .fold(0.0, f32::max);

    (buffer, TextMetrics { width })
}

/// Measure text using cosmic-text.
pub fn measure_text(font_system: &mut FontSystem, text: &str, font: &FontSpec) -> TextMetrics {
    shape_text(font_system, text, font).1
}
