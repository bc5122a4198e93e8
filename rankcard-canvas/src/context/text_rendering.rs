//! Text rendering operations for CanvasSurface.

use super::CanvasSurface;
use crate::style::{FontSpec, TextStyle};
use crate::text::{shape_text, TextMetrics};
use cosmic_text::Command;
use tiny_skia::Transform;

impl CanvasSurface {
    /// Measure text and return metrics.
    pub fn measure_text(&mut self, text: &str, font: &FontSpec) -> TextMetrics {
        crate::text::measure_text(&mut self.font_system, text, font)
    }

    /// Fill text with its alphabetic baseline at `y`, aligned on `x`.
    ///
    /// Returns the measured metrics so callers can chain adjacent runs.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> TextMetrics {
        log::debug!(target: "canvas", "fillText \"{}\" {} {} {:?}", text, x, y, style.align);
        let (buffer, metrics) = shape_text(&mut self.font_system, text, &style.font);

        let Some(paint) = style.fill.to_paint() else {
            return metrics;
        };

        let base_x = x + style.align.x_offset(metrics.width);
        let base_y = y;

        // Render each glyph as a vector path
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((base_x, base_y), 1.0);

                // Floating-point position for sub-pixel precision
                let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                // Font outlines have Y pointing up, screen has Y pointing down
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands.iter() {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                        Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                        Command::QuadTo(ctrl, end) => {
                            path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                        }
                        Command::CurveTo(c1, c2, end) => {
                            path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                        }
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        tiny_skia::FillRule::Winding,
                        Transform::from_translate(glyph_x, glyph_y),
                        None,
                    );
                }
            }
        }

        metrics
    }
}
